// ── API-to-domain type conversions ──
//
// Bridges raw `eventdesk_api::types` responses into `eventdesk_core::model`
// records. Enumerated strings are parsed into closed enums (an unknown value
// is an error, never a silent fallback); timestamps are parsed leniently;
// fields the backend sometimes omits are derived the way it would have.

use std::collections::BTreeMap;
use std::hash::Hash;
use std::str::FromStr;

use eventdesk_api::types::{
    AlertResponse, AreaPayload, CountResponse, CrowdDensityResponse, EmergencyExitResponse,
    EmergencyStatsResponse, EventResponse, FeedbackResponse, FeedbackStatsResponse,
    LocationPayload, LostPersonResponse, LostPersonStatsResponse, MedicalEmergencyResponse,
    MedicalFacilityResponse, WashroomResponse, WeatherAlertResponse, ZoneResponse,
};
use strum::IntoEnumIterator;

use crate::aggregate::{RATING_SCALE, Tally};
use crate::classify::{circle_area_m2, crowd_level, density_status, people_per_m2, sentiment_of};
use crate::error::CoreError;
use crate::model::common::{parse_timestamp, parse_wire, parse_wire_opt};
use crate::model::{
    Alert, Area, CrowdReading, EmergencyExit, EmergencyStats, Event, Feedback, FeedbackStats,
    Location, LostPerson, LostPersonStats, MedicalEmergency, MedicalFacility, PersonCount,
    Priority, Washroom, WeatherReading, Zone,
};

// ── Shared ─────────────────────────────────────────────────────────

impl From<LocationPayload> for Location {
    fn from(p: LocationPayload) -> Self {
        Self {
            lat: p.lat,
            lon: p.lon,
        }
    }
}

impl From<Location> for LocationPayload {
    fn from(l: Location) -> Self {
        Self {
            lat: l.lat,
            lon: l.lon,
        }
    }
}

impl From<AreaPayload> for Area {
    fn from(p: AreaPayload) -> Self {
        Self {
            name: p.name,
            location: p.location.into(),
            radius_m: p.radius_m,
        }
    }
}

impl From<Area> for AreaPayload {
    fn from(a: Area) -> Self {
        Self {
            name: a.name,
            location: a.location.into(),
            radius_m: a.radius_m,
        }
    }
}

/// Convert a list, failing on the first record that does not fit the model.
pub(crate) fn convert_all<W, M>(wire: Vec<W>) -> Result<Vec<M>, CoreError>
where
    M: TryFrom<W, Error = CoreError>,
{
    wire.into_iter().map(M::try_from).collect()
}

/// Re-key a backend count map onto an enum tally seeded with every variant.
fn tally_from_counts<K>(field: &str, counts: BTreeMap<String, u64>) -> Result<Tally<K>, CoreError>
where
    K: IntoEnumIterator + FromStr + Hash + Eq + Clone,
{
    let mut tally = Tally::known();
    for (raw, n) in counts {
        tally.add_n(parse_wire(field, &raw)?, n);
    }
    Ok(tally)
}

// ── Events ─────────────────────────────────────────────────────────

impl TryFrom<EventResponse> for Event {
    type Error = CoreError;

    fn try_from(e: EventResponse) -> Result<Self, CoreError> {
        Ok(Self {
            status: parse_wire("event status", &e.status)?,
            start_time: parse_timestamp(Some(e.start_time.as_str())),
            end_time: parse_timestamp(Some(e.end_time.as_str())),
            created_at: parse_timestamp(e.created_at.as_deref()),
            areas: e.areas.into_iter().map(Area::from).collect(),
            id: e.id,
            name: e.name,
            description: e.description,
            location: e.location,
            capacity: e.capacity,
            attendees_count: e.attendees_count,
            organizer_id: e.organizer_id,
        })
    }
}

// ── Zones ──────────────────────────────────────────────────────────

impl TryFrom<ZoneResponse> for Zone {
    type Error = CoreError;

    fn try_from(z: ZoneResponse) -> Result<Self, CoreError> {
        // Older records carry no label; derive it the way the backend does.
        let density_status = match parse_wire_opt("density status", z.density_status.as_deref())? {
            Some(status) => status,
            None => density_status(f64::from(z.current_density), f64::from(z.capacity)),
        };
        Ok(Self {
            density_status,
            last_updated: parse_timestamp(z.last_updated.as_deref()),
            id: z.id,
            event_id: z.event_id,
            name: z.name,
            capacity: z.capacity,
            current_density: z.current_density,
            image_url: z.image_url,
        })
    }
}

// ── Lost persons ───────────────────────────────────────────────────

impl TryFrom<LostPersonResponse> for LostPerson {
    type Error = CoreError;

    fn try_from(p: LostPersonResponse) -> Result<Self, CoreError> {
        let priority = parse_wire_opt("priority", p.priority.as_deref())?
            .unwrap_or_else(|| Priority::for_age(p.age));
        Ok(Self {
            status: parse_wire("lost-person status", &p.status)?,
            priority,
            last_seen_time: parse_timestamp(p.last_seen_time.as_deref()),
            reported_at: parse_timestamp(p.reported_at.as_deref()),
            id: p.id,
            event_id: p.event_id,
            name: p.name,
            age: p.age,
            gender: p.gender,
            description: p.description,
            last_seen_location: p.last_seen_location,
            photo_url: p.photo_url,
            reporter_name: p.reporter_name,
            reporter_phone: p.reporter_phone,
        })
    }
}

impl TryFrom<LostPersonStatsResponse> for LostPersonStats {
    type Error = CoreError;

    fn try_from(s: LostPersonStatsResponse) -> Result<Self, CoreError> {
        Ok(Self {
            total: s.total,
            by_status: tally_from_counts("lost-person status", s.by_status)?,
            by_priority: tally_from_counts("priority", s.by_priority)?,
        })
    }
}

// ── Medical ────────────────────────────────────────────────────────

impl TryFrom<MedicalEmergencyResponse> for MedicalEmergency {
    type Error = CoreError;

    fn try_from(m: MedicalEmergencyResponse) -> Result<Self, CoreError> {
        Ok(Self {
            emergency_type: parse_wire("emergency type", &m.emergency_type)?,
            severity: parse_wire("severity", &m.severity)?,
            status: parse_wire("emergency status", &m.status)?,
            reported_at: parse_timestamp(m.reported_at.as_deref()),
            response_time_min: m.response_time,
            id: m.id,
            event_id: m.event_id,
            patient_name: m.patient_name,
            patient_age: m.patient_age,
            description: m.description,
            location: m.location,
            responder_name: m.responder_name,
        })
    }
}

impl TryFrom<EmergencyStatsResponse> for EmergencyStats {
    type Error = CoreError;

    fn try_from(s: EmergencyStatsResponse) -> Result<Self, CoreError> {
        Ok(Self {
            total: s.total,
            by_severity: tally_from_counts("severity", s.by_severity)?,
            by_status: tally_from_counts("emergency status", s.by_status)?,
            by_type: tally_from_counts("emergency type", s.by_type)?,
        })
    }
}

impl TryFrom<MedicalFacilityResponse> for MedicalFacility {
    type Error = CoreError;

    fn try_from(f: MedicalFacilityResponse) -> Result<Self, CoreError> {
        Ok(Self {
            facility_type: parse_wire("facility type", &f.facility_type)?,
            id: f.id,
            event_id: f.event_id,
            name: f.facility_name,
            contact_number: f.contact_number,
            address: f.address,
        })
    }
}

// ── Exits ──────────────────────────────────────────────────────────

impl TryFrom<EmergencyExitResponse> for EmergencyExit {
    type Error = CoreError;

    fn try_from(x: EmergencyExitResponse) -> Result<Self, CoreError> {
        Ok(Self {
            status: parse_wire("exit status", &x.status)?,
            last_updated: parse_timestamp(x.last_updated.as_deref()),
            id: x.id,
            event_id: x.event_id,
            name: x.exit_name,
            location: x.location,
            capacity: x.capacity,
            current_flow_rate: x.current_flow_rate,
        })
    }
}

// ── Washrooms ──────────────────────────────────────────────────────

impl TryFrom<WashroomResponse> for Washroom {
    type Error = CoreError;

    fn try_from(w: WashroomResponse) -> Result<Self, CoreError> {
        Ok(Self {
            gender: parse_wire("washroom gender", &w.gender)?,
            availability: parse_wire("availability", &w.availability_status)?,
            id: w.id,
            event_id: w.event_id,
            name: w.name,
            floor_level: w.floor_level,
            capacity: w.capacity,
            location_details: w.location_details,
        })
    }
}

// ── Alerts ─────────────────────────────────────────────────────────

impl TryFrom<AlertResponse> for Alert {
    type Error = CoreError;

    fn try_from(a: AlertResponse) -> Result<Self, CoreError> {
        Ok(Self {
            kind: parse_wire("alert type", &a.alert_type)?,
            severity: parse_wire("alert severity", &a.severity)?,
            created_at: parse_timestamp(a.created_at.as_deref()),
            id: a.id,
            event_id: a.event_id,
            title: a.title,
            message: a.message,
            active: a.is_active,
        })
    }
}

impl From<WeatherAlertResponse> for WeatherReading {
    fn from(w: WeatherAlertResponse) -> Self {
        Self {
            observed_at: parse_timestamp(w.timestamp.as_deref()),
            id: w.id,
            event_id: w.event_id,
            temperature: w.temperature,
            humidity: w.humidity,
            condition: w.condition,
            wind_speed: w.wind_speed,
            description: w.description,
        }
    }
}

// ── Feedback ───────────────────────────────────────────────────────

impl TryFrom<FeedbackResponse> for Feedback {
    type Error = CoreError;

    fn try_from(f: FeedbackResponse) -> Result<Self, CoreError> {
        let (sentiment, sentiment_inferred) =
            match parse_wire_opt("sentiment", f.ai_sentiment.as_deref())? {
                Some(s) => (s, false),
                None => (sentiment_of(f.comments.as_deref().unwrap_or_default()), true),
            };
        Ok(Self {
            sentiment,
            sentiment_inferred,
            submitted_at: parse_timestamp(f.submitted_at.as_deref()),
            id: f.id,
            event_id: f.event_id,
            user_id: f.user_id,
            rating: f.rating,
            comment: f.comments,
            category: f.category,
        })
    }
}

impl TryFrom<FeedbackStatsResponse> for FeedbackStats {
    type Error = CoreError;

    fn try_from(s: FeedbackStatsResponse) -> Result<Self, CoreError> {
        let mut rating_distribution = Tally::with_categories(RATING_SCALE);
        for (key, n) in s.rating_distribution {
            let stars = key
                .strip_suffix("_star")
                .and_then(|d| d.parse::<u8>().ok())
                .ok_or_else(|| CoreError::unknown_value("rating bucket", &key))?;
            rating_distribution.add_n(stars, n);
        }
        Ok(Self {
            total: s.total_count,
            average_rating: s.average_rating,
            rating_distribution,
            sentiment: tally_from_counts("sentiment", s.sentiment_distribution)?,
        })
    }
}

// ── Crowd ──────────────────────────────────────────────────────────

impl TryFrom<CrowdDensityResponse> for CrowdReading {
    type Error = CoreError;

    fn try_from(c: CrowdDensityResponse) -> Result<Self, CoreError> {
        let area_m2 = c.area_m2.unwrap_or_else(|| circle_area_m2(c.radius_m));
        let people_per_m2 = c
            .people_per_m2
            .unwrap_or_else(|| people_per_m2(c.person_count, area_m2));
        let level = parse_wire_opt("crowd level", c.density_level.as_deref())?
            .unwrap_or_else(|| crowd_level(people_per_m2));
        Ok(Self {
            id: c.id,
            event_id: c.event_id,
            area_name: c.area_name,
            location: c.location.into(),
            radius_m: c.radius_m,
            person_count: c.person_count,
            area_m2,
            people_per_m2,
            level,
            timestamp: parse_timestamp(c.timestamp.as_deref()),
        })
    }
}

impl From<CountResponse> for PersonCount {
    fn from(c: CountResponse) -> Self {
        Self {
            image_filename: c.image_filename,
            person_count: c.person_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{
        AlertKind, AlertSeverity, CrowdLevel, DensityStatus, FacilityType, LostPersonStatus,
        Sentiment,
    };

    fn wire<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).expect("valid wire fixture")
    }

    #[test]
    fn reported_lost_person_reads_as_missing() {
        let raw: LostPersonResponse = wire(json!({
            "id": "LP1", "name": "Asha", "age": 70, "event_id": "EVT1",
            "status": "reported", "reported_at": "2025-06-01T18:40:00.512000"
        }));
        let person = LostPerson::try_from(raw).expect("converts");
        assert_eq!(person.status, LostPersonStatus::Missing);
        // No priority on the wire: derived from age.
        assert_eq!(person.priority, Priority::Critical);
        assert!(person.reported_at.is_some());
    }

    #[test]
    fn unknown_status_is_an_error() {
        let raw: EmergencyExitResponse = wire(json!({
            "id": "x1", "event_id": "EVT1", "exit_name": "North", "status": "blocked"
        }));
        let err = EmergencyExit::try_from(raw).expect_err("blocked is not canonical");
        assert!(matches!(err, CoreError::Internal(ref msg) if msg.contains("blocked")));
    }

    #[test]
    fn zone_without_label_is_classified_locally() {
        let raw: ZoneResponse = wire(json!({
            "id": "z1", "event_id": "EVT1", "name": "Food Court",
            "capacity": 500, "current_density": 399
        }));
        assert_eq!(Zone::try_from(raw).expect("converts").density_status, DensityStatus::Crowded);
    }

    #[test]
    fn feedback_sentiment_falls_back_to_keywords() {
        let raw: FeedbackResponse = wire(json!({
            "id": "FB1", "event_id": "EVT1", "rating": 2, "comments": "Awful toilets"
        }));
        let fb = Feedback::try_from(raw).expect("converts");
        assert_eq!(fb.sentiment, Sentiment::Negative);
        assert!(fb.sentiment_inferred);
    }

    #[test]
    fn facility_type_uses_kebab_case() {
        let raw: MedicalFacilityResponse = wire(json!({
            "id": "MF1", "event_id": "EVT1", "facility_name": "Tent A", "facility_type": "first-aid"
        }));
        assert_eq!(
            MedicalFacility::try_from(raw).expect("converts").facility_type,
            FacilityType::FirstAid
        );
    }

    #[test]
    fn stats_are_rekeyed_onto_known_categories() {
        let raw: FeedbackStatsResponse = wire(json!({
            "total_count": 3,
            "average_rating": 4.33,
            "rating_distribution": {"5_star": 2, "4_star": 0, "3_star": 1, "2_star": 0, "1_star": 0},
            "sentiment_distribution": {"positive": 2, "neutral": 1}
        }));
        let stats = FeedbackStats::try_from(raw).expect("converts");
        assert_eq!(stats.rating_distribution.get(&5), 2);
        assert_eq!(stats.rating_distribution.get(&1), 0);
        assert_eq!(stats.sentiment.get(&Sentiment::Negative), 0);
        assert_eq!(stats.sentiment.total(), 3);

        let raw: LostPersonStatsResponse = wire(json!({
            "total": 2, "by_status": {"reported": 1, "found": 1}, "by_priority": {"critical": 2}
        }));
        let stats = LostPersonStats::try_from(raw).expect("converts");
        assert_eq!(stats.by_status.get(&LostPersonStatus::Missing), 1);
        assert_eq!(stats.by_status.get(&LostPersonStatus::Resolved), 0);
    }

    #[test]
    fn crowd_reading_fills_derived_fields() {
        let raw: CrowdDensityResponse = wire(json!({
            "event_id": "EVT1", "area_name": "Gate 3",
            "location": {"lat": 12.9, "lon": 77.6},
            "radius_m": 10.0, "person_count": 900
        }));
        let reading = CrowdReading::try_from(raw).expect("converts");
        assert!((reading.area_m2 - 314.16).abs() < 1e-9);
        assert_eq!(reading.level, CrowdLevel::Risky);
    }

    #[test]
    fn alert_defaults_to_active_when_flag_is_missing() {
        let raw: AlertResponse = wire(json!({
            "id": "ALT1A2B3C", "event_id": "EVT1", "title": "Crowd Surge Warning",
            "message": "High density at Main Stage", "alert_type": "warning",
            "severity": "HIGH", "created_at": "2025-06-01T19:05:00.120000"
        }));
        let alert = Alert::try_from(raw).expect("converts");
        assert_eq!(alert.kind, AlertKind::Warning);
        assert_eq!(alert.severity, AlertSeverity::High);
        assert!(alert.active);
        assert_eq!(alert.state_label(), "active");
        assert!(alert.created_at.is_some());
    }

    #[test]
    fn unknown_alert_type_is_an_error() {
        let raw: AlertResponse = wire(json!({
            "id": "ALT1", "event_id": "EVT1", "title": "t", "message": "m",
            "alert_type": "advisory", "severity": "low", "is_active": false
        }));
        let err = Alert::try_from(raw).expect_err("advisory is not an alert type");
        assert!(matches!(err, CoreError::Internal(ref msg) if msg.contains("advisory")));
    }
}
