// ── Zone domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Crowding label for a zone, ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum DensityStatus {
    Low,
    Moderate,
    Crowded,
}

/// A spatial subdivision of an event with a capacity and a live head count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub capacity: u32,
    /// People currently in the zone (a count, not a ratio).
    pub current_density: u32,
    /// Label reported by the backend, or derived locally when it sent none.
    pub density_status: DensityStatus,
    pub image_url: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}
