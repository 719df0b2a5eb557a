// ── Crowd density readings ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::common::Location;

/// Banding of people per square metre, ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum CrowdLevel {
    Safe,
    Moderate,
    Risky,
    Overcrowded,
}

impl CrowdLevel {
    /// Capitalised label the backend stores and filters on.
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Moderate => "Moderate",
            Self::Risky => "Risky",
            Self::Overcrowded => "Overcrowded",
        }
    }
}

/// One head count over a circular area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdReading {
    pub id: Option<String>,
    pub event_id: String,
    pub area_name: String,
    pub location: Location,
    pub radius_m: f64,
    pub person_count: u32,
    pub area_m2: f64,
    pub people_per_m2: f64,
    pub level: CrowdLevel,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Answer from the person-counting service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCount {
    pub image_filename: Option<String>,
    pub person_count: u32,
}
