// ── Lost-person domain types ──

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
pub enum LostPersonStatus {
    /// Stored by the backend as `reported`.
    #[serde(alias = "reported")]
    #[strum(to_string = "missing", serialize = "reported")]
    Missing,
    Searching,
    Found,
    Resolved,
}

impl LostPersonStatus {
    /// Value the backend stores and accepts for this status.
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Missing => "reported",
            Self::Searching => "searching",
            Self::Found => "found",
            Self::Resolved => "resolved",
        }
    }

    /// Still being looked for.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Missing | Self::Searching)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// The backend's triage rule: young children and seniors are critical.
    pub fn for_age(age: u32) -> Self {
        if age <= 12 || age >= 65 {
            Self::Critical
        } else {
            Self::Medium
        }
    }
}

/// A missing-attendee case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostPerson {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub age: u32,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub last_seen_location: Option<String>,
    pub last_seen_time: Option<DateTime<Utc>>,
    pub photo_url: Option<String>,
    pub reporter_name: Option<String>,
    pub reporter_phone: Option<String>,
    pub status: LostPersonStatus,
    pub priority: Priority,
    pub reported_at: Option<DateTime<Utc>>,
}

/// Server-side counts for one event.
#[derive(Debug, Clone, Serialize)]
pub struct LostPersonStats {
    pub total: u64,
    pub by_status: Tally<LostPersonStatus>,
    pub by_priority: Tally<Priority>,
}
