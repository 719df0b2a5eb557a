// ── Attendee feedback domain types ──

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
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub event_id: String,
    pub user_id: Option<String>,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: Option<String>,
    pub category: Option<String>,
    pub sentiment: Sentiment,
    /// `true` when the sentiment was derived locally from the comment.
    pub sentiment_inferred: bool,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Server-side summary for one event.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackStats {
    pub total: u64,
    pub average_rating: f64,
    /// Keyed by star count, 5 down to 1.
    pub rating_distribution: Tally<u8>,
    pub sentiment: Tally<Sentiment>,
}
