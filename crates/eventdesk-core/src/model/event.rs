// ── Event domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::common::Area;

/// Lifecycle of an event. Transitions are operator-driven and unconstrained.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum EventStatus {
    Upcoming,
    Live,
    Completed,
}

/// The root aggregate: zones and reports reference an event by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub capacity: Option<u32>,
    pub attendees_count: Option<u32>,
    pub areas: Vec<Area>,
    pub organizer_id: Option<String>,
    pub status: EventStatus,
    pub created_at: Option<DateTime<Utc>>,
}
