// ── Aggregation over record collections ──
//
// Reducers that turn a slice of records into the numbers a dashboard card
// shows. They never mutate their input, never keep state between calls and
// never produce NaN or infinity: empty input yields 0.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::classify::rounded_percent;
use crate::model::{Feedback, Sentiment};

/// Star ratings in display order.
pub const RATING_SCALE: [u8; 5] = [5, 4, 3, 2, 1];

// ── Tally ────────────────────────────────────────────────────────────

/// Ordered category → count map.
///
/// Categories seeded up front always appear (with 0 when nothing matched)
/// and keep their seeding order. A key outside the seeded set is appended
/// at the end, so every record is counted exactly once.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Tally<K> {
    counts: IndexMap<K, u64>,
}

impl<K: Hash + Eq> Default for Tally<K> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> PartialEq for Tally<K> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K: Hash + Eq + Clone> Tally<K> {
    /// A tally with every category present at 0.
    pub fn with_categories<I: IntoIterator<Item = K>>(categories: I) -> Self {
        Self {
            counts: categories.into_iter().map(|k| (k, 0)).collect(),
        }
    }

    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    pub fn add_n(&mut self, key: K, n: u64) {
        *self.counts.entry(key).or_insert(0) += n;
    }

    pub fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of categories, including empty ones.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    /// Each category's share of the total, via [`percentage_of`].
    pub fn percentages(&self) -> IndexMap<K, u32> {
        let total = self.total();
        self.counts
            .iter()
            .map(|(k, v)| (k.clone(), percentage_of(*v, total)))
            .collect()
    }
}

impl<K: IntoEnumIterator + Hash + Eq + Clone> Tally<K> {
    /// Seeded with every variant of an enum, in declaration order.
    pub fn known() -> Self {
        Self::with_categories(K::iter())
    }
}

// ── Reducers ─────────────────────────────────────────────────────────

/// Count records per category, seeding `categories` first.
pub fn count_by_key<R, K, I, F>(records: &[R], categories: I, key_fn: F) -> Tally<K>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = K>,
    F: Fn(&R) -> K,
{
    let mut tally = Tally::with_categories(categories);
    for record in records {
        tally.add(key_fn(record));
    }
    tally
}

/// [`count_by_key`] seeded with every variant of an enum key.
pub fn count_by_enum<R, K, F>(records: &[R], key_fn: F) -> Tally<K>
where
    K: IntoEnumIterator + Hash + Eq + Clone,
    F: Fn(&R) -> K,
{
    count_by_key(records, K::iter(), key_fn)
}

/// Arithmetic mean; 0 for an empty collection.
pub fn average<R, F>(records: &[R], value_fn: F) -> f64
where
    F: Fn(&R) -> f64,
{
    mean(records.iter().map(value_fn))
}

/// Mean over the records that carry a value; 0 when none do.
pub fn average_present<R, F>(records: &[R], value_fn: F) -> f64
where
    F: Fn(&R) -> Option<f64>,
{
    mean(records.iter().filter_map(value_fn))
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .filter(|v| v.is_finite())
        .fold((0.0, 0u64), |(sum, n), v| (sum + v, n + 1));
    if n == 0 { 0.0 } else { sum / to_f64(n) }
}

/// Rounded share of `total`; 0 when `total` is 0.
pub fn percentage_of(count: u64, total: u64) -> u32 {
    rounded_percent(to_f64(count), to_f64(total))
}

/// Largest value in the collection; 0 for an empty one.
pub fn peak<R, F>(records: &[R], value_fn: F) -> u32
where
    F: Fn(&R) -> u32,
{
    records.iter().map(value_fn).max().unwrap_or(0)
}

/// Saturating record count.
pub fn count(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
pub(crate) fn to_f64(n: u64) -> f64 {
    n as f64
}

// ── Feedback distributions ───────────────────────────────────────────

/// Counts and rounded shares per sentiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentDistribution {
    pub total: u64,
    pub counts: Tally<Sentiment>,
    pub percentages: IndexMap<Sentiment, u32>,
}

pub fn sentiment_distribution(feedback: &[Feedback]) -> SentimentDistribution {
    let counts = count_by_enum(feedback, |f| f.sentiment);
    SentimentDistribution {
        total: counts.total(),
        percentages: counts.percentages(),
        counts,
    }
}

/// Counts per star, 5 down to 1, all present.
pub fn rating_distribution(feedback: &[Feedback]) -> Tally<u8> {
    count_by_key(feedback, RATING_SCALE, |f| f.rating)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::LostPersonStatus;

    fn feedback(rating: u8, sentiment: Sentiment) -> Feedback {
        Feedback {
            id: format!("FB{rating}"),
            event_id: "EVT1".into(),
            user_id: None,
            rating,
            comment: None,
            category: None,
            sentiment,
            sentiment_inferred: false,
            submitted_at: None,
        }
    }

    #[test]
    fn lost_person_status_tally() {
        use LostPersonStatus::{Found, Missing, Resolved, Searching};
        let statuses = [Missing, Missing, Searching, Found, Resolved];
        let tally = count_by_enum(&statuses, |s| *s);

        assert_eq!(tally.get(&Missing), 2);
        assert_eq!(tally.get(&Searching), 1);
        assert_eq!(tally.get(&Found), 1);
        assert_eq!(tally.get(&Resolved), 1);
        assert_eq!(tally.total(), 5);
    }

    #[test]
    fn absent_categories_are_still_listed() {
        let statuses = [LostPersonStatus::Missing, LostPersonStatus::Searching];
        let tally = count_by_enum(&statuses, |s| *s);

        assert_eq!(tally.len(), 4);
        assert_eq!(tally.get(&LostPersonStatus::Resolved), 0);
        let order: Vec<_> = tally.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            order,
            vec![
                LostPersonStatus::Missing,
                LostPersonStatus::Searching,
                LostPersonStatus::Found,
                LostPersonStatus::Resolved,
            ]
        );
    }

    #[test]
    fn unseeded_keys_are_appended() {
        let words = ["open", "closed", "emergency_only"];
        let tally = count_by_key(&words, ["open", "closed"], |w| *w);

        assert_eq!(tally.total(), 3);
        assert_eq!(tally.get(&"emergency_only"), 1);
        assert_eq!(tally.iter().last().map(|(k, _)| *k), Some("emergency_only"));
    }

    #[test]
    fn empty_inputs_have_defined_results() {
        let none: [Feedback; 0] = [];
        assert!(average(&none, |f| f64::from(f.rating)).abs() < f64::EPSILON);
        assert!(average_present(&none, |_| Some(1.0)).abs() < f64::EPSILON);
        assert_eq!(percentage_of(0, 0), 0);
        assert_eq!(percentage_of(3, 0), 0);
        assert_eq!(peak(&none, |f| u32::from(f.rating)), 0);

        let distribution = sentiment_distribution(&none);
        assert_eq!(distribution.total, 0);
        assert!(distribution.percentages.values().all(|p| *p == 0));
    }

    #[test]
    fn ratings_and_sentiment_scenario() {
        let records = [
            feedback(5, Sentiment::Positive),
            feedback(3, Sentiment::Neutral),
            feedback(2, Sentiment::Negative),
            feedback(4, Sentiment::Positive),
        ];

        let avg = average(&records, |f| f64::from(f.rating));
        assert!((avg - 3.5).abs() < f64::EPSILON);

        let distribution = sentiment_distribution(&records);
        assert_eq!(distribution.total, 4);
        assert_eq!(distribution.counts.get(&Sentiment::Positive), 2);
        assert_eq!(distribution.counts.get(&Sentiment::Neutral), 1);
        assert_eq!(distribution.counts.get(&Sentiment::Negative), 1);
        assert_eq!(distribution.percentages[&Sentiment::Positive], 50);
        assert_eq!(distribution.percentages[&Sentiment::Neutral], 25);
        assert_eq!(distribution.percentages[&Sentiment::Negative], 25);

        let stars = rating_distribution(&records);
        let rows: Vec<(u8, u64)> = stars.iter().map(|(k, v)| (*k, v)).collect();
        assert_eq!(rows, vec![(5, 1), (4, 1), (3, 1), (2, 1), (1, 0)]);
    }

    #[test]
    fn repeated_calls_agree() {
        let records = [feedback(5, Sentiment::Positive), feedback(1, Sentiment::Negative)];
        assert_eq!(sentiment_distribution(&records), sentiment_distribution(&records));
        assert_eq!(rating_distribution(&records), rating_distribution(&records));
        assert_eq!(
            average(&records, |f| f64::from(f.rating)).to_bits(),
            average(&records, |f| f64::from(f.rating)).to_bits()
        );
    }

    #[test]
    fn present_values_only() {
        let times = [Some(4.0), None, Some(8.0)];
        assert!((average_present(&times, |t| *t) - 6.0).abs() < f64::EPSILON);
    }
}
