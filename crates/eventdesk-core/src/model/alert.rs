// ── Alert domain types ──
//
// Operator broadcasts (info through emergency) and the weather readings
// posted alongside them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum AlertKind {
    Info,
    Warning,
    Emergency,
}

/// Ordered from least to most urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    /// Cleared by deactivation; alerts are never reactivated.
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Alert {
    pub fn state_label(&self) -> &'static str {
        if self.active { "active" } else { "inactive" }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub id: String,
    pub event_id: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    pub condition: String,
    pub wind_speed: Option<f64>,
    pub description: Option<String>,
    pub observed_at: Option<DateTime<Utc>>,
}
