// ── Feedback board ──

use serde::Serialize;

use crate::aggregate::{
    SentimentDistribution, Tally, average, count, rating_distribution, sentiment_distribution,
};
use crate::classify::round_to;
use crate::model::{Feedback, Sentiment};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackBoard {
    pub total: u64,
    /// Unrounded mean; 0 with no feedback.
    pub average_rating: f64,
    pub ratings: Tally<u8>,
    pub sentiment: SentimentDistribution,
    pub positive: u64,
    pub negative: u64,
}

impl FeedbackBoard {
    pub fn assemble(feedback: &[Feedback]) -> Self {
        let sentiment = sentiment_distribution(feedback);
        Self {
            total: count(feedback.len()),
            average_rating: average(feedback, |f| f64::from(f.rating)),
            ratings: rating_distribution(feedback),
            positive: sentiment.counts.get(&Sentiment::Positive),
            negative: sentiment.counts.get(&Sentiment::Negative),
            sentiment,
        }
    }

    /// Average rating as shown on the card, e.g. `3.5`.
    pub fn average_rating_label(&self) -> String {
        format!("{:.1}", round_to(self.average_rating, 1))
    }
}
