// Wire types for the event-operations backend.
//
// Field names mirror the backend's snake_case JSON. Enumerated values
// (statuses, priorities, severities) stay `String` here; `eventdesk-core`
// parses them into typed enums.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Shared ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPayload {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPayload {
    pub name: String,
    pub location: LocationPayload,
    pub radius_m: f64,
}

/// Acknowledgement returned by status PATCHes and some DELETEs.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub alert_id: Option<String>,
}

// ── Events ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub attendees_count: Option<u32>,
    #[serde(default)]
    pub areas: Vec<AreaPayload>,
    #[serde(default)]
    pub organizer_id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/replace body for `/events/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub areas: Vec<AreaPayload>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<String>,
}

// ── Zones ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneResponse {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub current_density: u32,
    #[serde(default)]
    pub density_status: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ZonePayload {
    pub event_id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_density: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

// ── Lost persons ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostPersonResponse {
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub last_seen_location: Option<String>,
    #[serde(default)]
    pub last_seen_time: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub reporter_id: Option<String>,
    #[serde(default)]
    pub reporter_name: Option<String>,
    #[serde(default)]
    pub reporter_phone: Option<String>,
    pub event_id: String,
    pub status: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub reported_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LostPersonPayload {
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

#[derive(Debug, Clone, Default, Serialize)]
pub struct LostPersonQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LostPersonStatsResponse {
    pub total: u64,
    #[serde(default)]
    pub by_status: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_priority: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUploadResponse {
    pub message: String,
    pub photo_url: String,
    #[serde(default)]
    pub filename: Option<String>,
}

// ── Medical ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalEmergencyResponse {
    pub id: String,
    pub event_id: String,
    pub emergency_type: String,
    pub severity: String,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub patient_age: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub status: String,
    #[serde(default)]
    pub responder_name: Option<String>,
    /// Minutes from report to responder arrival.
    #[serde(default)]
    pub response_time: Option<u32>,
    #[serde(default)]
    pub reported_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MedicalEmergencyPayload {
    pub event_id: String,
    pub emergency_type: String,
    pub severity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MedicalEmergencyQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_type: Option<String>,
}

/// Query arguments for `PATCH /medical-emergencies/{id}/status`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmergencyStatusUpdate {
    pub new_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmergencyStatsResponse {
    pub total: u64,
    #[serde(default)]
    pub by_severity: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_status: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_type: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalFacilityResponse {
    #[serde(default)]
    pub id: String,
    pub event_id: String,
    pub facility_name: String,
    pub facility_type: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MedicalFacilityPayload {
    pub event_id: String,
    pub facility_name: String,
    pub facility_type: String,
    pub contact_number: String,
    pub address: String,
}

// ── Emergency exits ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyExitResponse {
    pub id: String,
    pub event_id: String,
    pub exit_name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub status: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub current_flow_rate: Option<u32>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmergencyExitPayload {
    pub event_id: String,
    pub exit_name: String,
    pub location: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_flow_rate: Option<u32>,
}

// ── Washrooms ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WashroomResponse {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub gender: String,
    #[serde(default)]
    pub floor_level: Option<String>,
    #[serde(default)]
    pub capacity: u32,
    pub availability_status: String,
    #[serde(default)]
    pub location_details: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WashroomPayload {
    pub event_id: String,
    pub name: String,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_level: Option<String>,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_details: Option<String>,
}

// ── Feedback ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub event_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub rating: u8,
    #[serde(default, alias = "comment")]
    pub comments: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub ai_sentiment: Option<String>,
    #[serde(default, alias = "created_at")]
    pub submitted_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedbackPayload {
    pub event_id: String,
    pub user_id: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedbackQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackStatsResponse {
    pub total_count: u64,
    #[serde(default)]
    pub average_rating: f64,
    /// Keys `5_star` .. `1_star`.
    #[serde(default)]
    pub rating_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub sentiment_distribution: BTreeMap<String, u64>,
}

// ── Alerts ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertResponse {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub message: String,
    pub alert_type: String,
    pub severity: String,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertPayload {
    pub event_id: String,
    pub title: String,
    pub message: String,
    pub alert_type: String,
    pub severity: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAlertResponse {
    pub id: String,
    pub event_id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub condition: String,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherAlertPayload {
    pub event_id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ── Crowd density & inference ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdDensityResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub event_id: String,
    pub area_name: String,
    pub location: LocationPayload,
    pub radius_m: f64,
    pub person_count: u32,
    #[serde(default)]
    pub area_m2: Option<f64>,
    #[serde(default)]
    pub people_per_m2: Option<f64>,
    #[serde(default)]
    pub density_level: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrowdDensityPayload {
    pub event_id: String,
    pub area_name: String,
    pub location: LocationPayload,
    pub radius_m: f64,
    pub person_count: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CrowdDensityQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density_level: Option<String>,
}

/// Extra form fields sent alongside an inference image.
#[derive(Debug, Clone, Default)]
pub struct InferenceContext {
    pub event_id: Option<String>,
    pub area_name: Option<String>,
    pub radius_m: Option<f64>,
    pub save_record: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountResponse {
    #[serde(default)]
    pub image_filename: Option<String>,
    pub person_count: u32,
}

/// `?event_id=` filter shared by the event-scoped collections.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventScope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl EventScope {
    pub fn event(event_id: impl Into<String>) -> Self {
        Self {
            event_id: Some(event_id.into()),
        }
    }
}
