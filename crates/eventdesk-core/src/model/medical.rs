// ── Medical domain types ──
//
// Two unrelated shapes share the "medical" page: emergencies (incidents with
// a response lifecycle) and facilities (static first-aid points).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::aggregate::Tally;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum EmergencyStatus {
    Reported,
    ResponderDispatched,
    OnScene,
    Transported,
    Resolved,
}

impl EmergencyStatus {
    /// Still needs a responder's attention.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Reported | Self::ResponderDispatched | Self::OnScene)
    }

    /// Handed off or finished.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Transported | Self::Resolved)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum Severity {
    Critical,
    Severe,
    Moderate,
    Minor,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum EmergencyType {
    Injury,
    Illness,
    Heatstroke,
    Cardiac,
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum FacilityType {
    Hospital,
    Clinic,
    FirstAid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalEmergency {
    pub id: String,
    pub event_id: String,
    pub emergency_type: EmergencyType,
    pub severity: Severity,
    pub patient_name: Option<String>,
    pub patient_age: Option<u32>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: EmergencyStatus,
    pub responder_name: Option<String>,
    /// Minutes from report to responder arrival.
    pub response_time_min: Option<u32>,
    pub reported_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalFacility {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub facility_type: FacilityType,
    pub contact_number: Option<String>,
    pub address: Option<String>,
}

/// Server-side counts for one event.
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyStats {
    pub total: u64,
    pub by_severity: Tally<Severity>,
    pub by_status: Tally<EmergencyStatus>,
    pub by_type: Tally<EmergencyType>,
}
