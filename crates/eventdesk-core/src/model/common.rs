// ── Common types shared across the domain model ──

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// WGS-84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// A named circular area inside an event, used for crowd readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    pub location: Location,
    pub radius_m: f64,
}

/// Parse a backend timestamp.
///
/// The backend emits naive UTC (`2025-06-01T18:30:00.123456`) while forms
/// post minute-precision values (`2025-06-01T18:30`); both are accepted, as is
/// full RFC 3339. Unparseable values are dropped.
pub(crate) fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Parse a wire enum value, naming the field when the backend sends
/// something outside the known vocabulary.
pub(crate) fn parse_wire<T: FromStr>(field: &str, raw: &str) -> Result<T, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::unknown_value(field, raw))
}

/// Like [`parse_wire`] for optional fields.
pub(crate) fn parse_wire_opt<T: FromStr>(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<T>, CoreError> {
    raw.filter(|s| !s.trim().is_empty())
        .map(|s| parse_wire(field, s))
        .transpose()
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn accepts_backend_and_form_timestamps() {
        let naive = parse_timestamp(Some("2025-06-01T18:30:00.123456")).map(|t| t.hour());
        assert_eq!(naive, Some(18));

        let minutes = parse_timestamp(Some("2025-06-01T18:30")).map(|t| t.minute());
        assert_eq!(minutes, Some(30));

        let rfc = parse_timestamp(Some("2025-06-01T18:30:00+02:00")).map(|t| t.hour());
        assert_eq!(rfc, Some(16));

        let day = parse_timestamp(Some("2025-06-01 07:00:00")).map(|t| t.day());
        assert_eq!(day, Some(1));
    }

    #[test]
    fn garbage_timestamps_are_dropped() {
        assert!(parse_timestamp(Some("yesterday")).is_none());
        assert!(parse_timestamp(None).is_none());
    }
}
