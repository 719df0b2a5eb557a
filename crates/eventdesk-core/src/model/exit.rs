// ── Emergency exit domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Canonical exit vocabulary (`clear` / `moderate` / `crowded`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum ExitStatus {
    Clear,
    Moderate,
    Crowded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyExit {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub location: Option<String>,
    pub status: ExitStatus,
    /// People per minute the exit is rated for.
    pub capacity: Option<u32>,
    /// Observed people per minute.
    pub current_flow_rate: Option<u32>,
    pub last_updated: Option<DateTime<Utc>>,
}
