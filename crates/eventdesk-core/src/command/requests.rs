// ── Typed request structs for Command payloads ──
//
// Creates and full (PUT) updates share one struct per resource, since the
// backend replaces the whole record on update. Each converts into its wire
// payload once `validate` has passed.

use eventdesk_api::types::{
    AlertPayload, AreaPayload, CrowdDensityPayload, EmergencyExitPayload, EventPayload,
    FeedbackPayload, InferenceContext, LostPersonPayload, MedicalEmergencyPayload,
    MedicalFacilityPayload, WashroomPayload, WeatherAlertPayload, ZonePayload,
};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{
    AlertKind, AlertSeverity, Area, Availability, DensityStatus, EmergencyType, ExitStatus,
    FacilityType, Location, Severity, WashroomGender,
};

fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::ValidationFailed {
            message: format!("{field} is required"),
        })
    } else {
        Ok(())
    }
}

// ── Events ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Local time as entered, e.g. `2025-06-01T18:00`.
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub areas: Vec<Area>,
}

impl EventRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require("start_time", &self.start_time)?;
        require("end_time", &self.end_time)
    }
}

impl From<EventRequest> for EventPayload {
    fn from(r: EventRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            start_time: r.start_time,
            end_time: r.end_time,
            location: r.location,
            capacity: r.capacity,
            attendees_count: r.attendees_count,
            organizer_id: r.organizer_id,
            areas: r.areas.into_iter().map(AreaPayload::from).collect(),
        }
    }
}

// ── Zones ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneRequest {
    /// Filled from the current event when a JSON file leaves it out.
    #[serde(default)]
    pub event_id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_density: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_status: Option<DensityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ZoneRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("event_id", &self.event_id)?;
        require("name", &self.name)
    }
}

impl From<ZoneRequest> for ZonePayload {
    fn from(r: ZoneRequest) -> Self {
        Self {
            event_id: r.event_id,
            name: r.name,
            capacity: r.capacity,
            current_density: r.current_density,
            density_status: r.density_status.map(|s| s.to_string()),
            image_url: r.image_url,
        }
    }
}

// ── Lost persons ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LostPersonReport {
    /// Filled from the current event when a JSON file leaves it out.
    #[serde(default)]
    pub event_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub description: String,
    pub last_seen_location: String,
    pub last_seen_time: String,
    pub reporter_id: String,
    pub reporter_name: String,
    pub reporter_phone: String,
}

impl LostPersonReport {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("event_id", &self.event_id)?;
        require("name", &self.name)?;
        require("last_seen_location", &self.last_seen_location)?;
        require("reporter_phone", &self.reporter_phone)
    }
}

impl From<LostPersonReport> for LostPersonPayload {
    fn from(r: LostPersonReport) -> Self {
        Self {
            event_id: r.event_id,
            name: r.name,
            age: r.age,
            gender: r.gender,
            description: r.description,
            last_seen_location: r.last_seen_location,
            last_seen_time: r.last_seen_time,
            reporter_id: r.reporter_id,
            reporter_name: r.reporter_name,
            reporter_phone: r.reporter_phone,
        }
    }
}

// ── Medical ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyReport {
    pub event_id: String,
    pub emergency_type: EmergencyType,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: String,
}

impl EmergencyReport {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("event_id", &self.event_id)?;
        require("location", &self.location)
    }
}

impl From<EmergencyReport> for MedicalEmergencyPayload {
    fn from(r: EmergencyReport) -> Self {
        Self {
            event_id: r.event_id,
            emergency_type: r.emergency_type.to_string(),
            severity: r.severity.to_string(),
            patient_name: r.patient_name,
            patient_age: r.patient_age,
            description: r.description,
            location: r.location,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityRequest {
    pub event_id: String,
    pub name: String,
    pub facility_type: FacilityType,
    pub contact_number: String,
    pub address: String,
}

impl FacilityRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("event_id", &self.event_id)?;
        require("name", &self.name)
    }
}

impl From<FacilityRequest> for MedicalFacilityPayload {
    fn from(r: FacilityRequest) -> Self {
        Self {
            event_id: r.event_id,
            facility_name: r.name,
            facility_type: r.facility_type.to_string(),
            contact_number: r.contact_number,
            address: r.address,
        }
    }
}

// ── Exits ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitRequest {
    pub event_id: String,
    pub name: String,
    pub location: String,
    #[serde(default = "default_exit_status")]
    pub status: ExitStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_flow_rate: Option<u32>,
}

fn default_exit_status() -> ExitStatus {
    ExitStatus::Clear
}

impl ExitRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("event_id", &self.event_id)?;
        require("name", &self.name)?;
        require("location", &self.location)
    }
}

impl From<ExitRequest> for EmergencyExitPayload {
    fn from(r: ExitRequest) -> Self {
        Self {
            event_id: r.event_id,
            exit_name: r.name,
            location: r.location,
            status: r.status.to_string(),
            capacity: r.capacity,
            current_flow_rate: r.current_flow_rate,
        }
    }
}

// ── Washrooms ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WashroomRequest {
    pub event_id: String,
    pub name: String,
    pub gender: WashroomGender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_level: Option<String>,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_details: Option<String>,
}

impl WashroomRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("event_id", &self.event_id)?;
        require("name", &self.name)
    }
}

impl From<WashroomRequest> for WashroomPayload {
    fn from(r: WashroomRequest) -> Self {
        Self {
            event_id: r.event_id,
            name: r.name,
            gender: r.gender.to_string(),
            floor_level: r.floor_level,
            capacity: r.capacity,
            availability_status: r.availability.map(|a| a.to_string()),
            location_details: r.location_details,
        }
    }
}

// ── Feedback ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub event_id: String,
    pub user_id: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FeedbackSubmission {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("event_id", &self.event_id)?;
        require("user_id", &self.user_id)?;
        if (1..=5).contains(&self.rating) {
            Ok(())
        } else {
            Err(CoreError::ValidationFailed {
                message: format!("rating must be 1-5, got {}", self.rating),
            })
        }
    }
}

impl From<FeedbackSubmission> for FeedbackPayload {
    fn from(r: FeedbackSubmission) -> Self {
        Self {
            event_id: r.event_id,
            user_id: r.user_id,
            rating: r.rating,
            comments: r.comment,
            category: r.category,
        }
    }
}

// ── Alerts ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRequest {
    pub event_id: String,
    pub title: String,
    pub message: String,
    #[serde(default = "default_alert_kind")]
    pub kind: AlertKind,
    pub severity: AlertSeverity,
}

fn default_alert_kind() -> AlertKind {
    AlertKind::Info
}

impl AlertRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("event_id", &self.event_id)?;
        require("title", &self.title)?;
        require("message", &self.message)
    }
}

impl From<AlertRequest> for AlertPayload {
    fn from(r: AlertRequest) -> Self {
        Self {
            event_id: r.event_id,
            title: r.title,
            message: r.message,
            alert_type: r.kind.to_string(),
            severity: r.severity.to_string(),
        }
    }
}

/// A weather observation for one event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherReport {
    pub event_id: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, 0-100.
    pub humidity: f64,
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WeatherReport {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("event_id", &self.event_id)?;
        require("condition", &self.condition)?;
        if !self.temperature.is_finite() {
            return Err(CoreError::ValidationFailed {
                message: "temperature must be a number".into(),
            });
        }
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(CoreError::ValidationFailed {
                message: format!("humidity must be 0-100, got {}", self.humidity),
            });
        }
        if self.wind_speed.is_some_and(|w| w < 0.0 || !w.is_finite()) {
            return Err(CoreError::ValidationFailed {
                message: "wind_speed must not be negative".into(),
            });
        }
        Ok(())
    }
}

impl From<WeatherReport> for WeatherAlertPayload {
    fn from(r: WeatherReport) -> Self {
        Self {
            event_id: r.event_id,
            temperature: r.temperature,
            humidity: r.humidity,
            condition: r.condition,
            wind_speed: r.wind_speed,
            description: r.description,
        }
    }
}

// ── Crowd ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdReadingRequest {
    pub event_id: String,
    pub area_name: String,
    pub location: Location,
    pub radius_m: f64,
    pub person_count: u32,
}

impl CrowdReadingRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("event_id", &self.event_id)?;
        require("area_name", &self.area_name)?;
        if self.radius_m.is_finite() && self.radius_m > 0.0 {
            Ok(())
        } else {
            Err(CoreError::ValidationFailed {
                message: format!("radius_m must be positive, got {}", self.radius_m),
            })
        }
    }
}

impl From<CrowdReadingRequest> for CrowdDensityPayload {
    fn from(r: CrowdReadingRequest) -> Self {
        Self {
            event_id: r.event_id,
            area_name: r.area_name,
            location: r.location.into(),
            radius_m: r.radius_m,
            person_count: r.person_count,
        }
    }
}

/// Context sent with an image to the person-counting service. With
/// `save_record` set (and event, area and radius given) the backend also
/// stores a crowd reading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonCountRequest {
    pub event_id: Option<String>,
    pub area_name: Option<String>,
    pub radius_m: Option<f64>,
    pub save_record: bool,
}

impl PersonCountRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.radius_m.is_some_and(|r| r <= 0.0 || !r.is_finite()) {
            return Err(CoreError::ValidationFailed {
                message: "radius_m must be a positive number".into(),
            });
        }
        if self.save_record
            && (self.event_id.is_none() || self.area_name.is_none() || self.radius_m.is_none())
        {
            return Err(CoreError::ValidationFailed {
                message: "saving a reading needs event_id, area_name and radius_m".into(),
            });
        }
        Ok(())
    }
}

impl From<PersonCountRequest> for InferenceContext {
    fn from(r: PersonCountRequest) -> Self {
        Self {
            event_id: r.event_id,
            area_name: r.area_name,
            radius_m: r.radius_m,
            save_record: r.save_record,
        }
    }
}
