// ── Status derivation ──
//
// Pure functions mapping a count/capacity ratio onto a discrete status.
// Every band table has an inclusive lower bound and covers [0, ∞), so no
// ratio is left unclassified. Percentages are rounded half-up to a whole
// number *before* comparison; a capacity of zero (or any non-finite input)
// reads as 0%.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

use crate::model::{CrowdLevel, DensityStatus, Sentiment};

// ── Band tables ──────────────────────────────────────────────────────

/// Occupancy: <50 safe, 50-74 moderate, 75-89 risky, ≥90 critical.
pub const OCCUPANCY_MODERATE_PCT: u32 = 50;
pub const OCCUPANCY_RISKY_PCT: u32 = 75;
pub const OCCUPANCY_CRITICAL_PCT: u32 = 90;

/// Zone density: <50 low, 50-79 moderate, ≥80 crowded.
pub const DENSITY_MODERATE_PCT: u32 = 50;
pub const DENSITY_CROWDED_PCT: u32 = 80;

/// Exit utilization: <50 low, 50-69 moderate, 70-89 high, ≥90 critical.
pub const UTILIZATION_MODERATE_PCT: u32 = 50;
pub const UTILIZATION_HIGH_PCT: u32 = 70;
pub const UTILIZATION_CRITICAL_PCT: u32 = 90;

/// People per square metre: ≤0.5 safe, ≤2 moderate, ≤4 risky, above overcrowded.
pub const CROWD_SAFE_MAX: f64 = 0.5;
pub const CROWD_MODERATE_MAX: f64 = 2.0;
pub const CROWD_RISKY_MAX: f64 = 4.0;

const POSITIVE_WORDS: &[&str] = &[
    "great", "excellent", "amazing", "wonderful", "good", "love", "best", "awesome",
];
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "poor", "terrible", "worst", "hate", "awful", "horrible", "disappointing",
];

// ── Derived statuses ─────────────────────────────────────────────────

/// How full a zone is relative to its capacity, ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OccupancyStatus {
    Safe,
    Moderate,
    Risky,
    Critical,
}

impl OccupancyStatus {
    pub fn from_percent(pct: u32) -> Self {
        if pct >= OCCUPANCY_CRITICAL_PCT {
            Self::Critical
        } else if pct >= OCCUPANCY_RISKY_PCT {
            Self::Risky
        } else if pct >= OCCUPANCY_MODERATE_PCT {
            Self::Moderate
        } else {
            Self::Safe
        }
    }

    /// Counted as a "critical zone" on the event dashboard.
    pub fn needs_attention(self) -> bool {
        matches!(self, Self::Risky | Self::Critical)
    }
}

/// Flow through an exit relative to its rated capacity, ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UtilizationStatus {
    Low,
    Moderate,
    High,
    Critical,
}

impl UtilizationStatus {
    pub fn from_percent(pct: u32) -> Self {
        if pct >= UTILIZATION_CRITICAL_PCT {
            Self::Critical
        } else if pct >= UTILIZATION_HIGH_PCT {
            Self::High
        } else if pct >= UTILIZATION_MODERATE_PCT {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl DensityStatus {
    pub fn from_percent(pct: u32) -> Self {
        if pct >= DENSITY_CROWDED_PCT {
            Self::Crowded
        } else if pct >= DENSITY_MODERATE_PCT {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

// ── Percent math ─────────────────────────────────────────────────────

/// `numerator / denominator × 100`, rounded half-up to a whole percent.
///
/// Returns 0 for a non-positive or non-finite denominator and clamps
/// negative ratios to 0.
pub fn rounded_percent(numerator: f64, denominator: f64) -> u32 {
    if !numerator.is_finite() || !denominator.is_finite() || denominator <= 0.0 {
        return 0;
    }
    round_half_up(numerator * 100.0 / denominator)
}

/// Round a non-negative value to the nearest whole number, halves up.
/// Negative or non-finite input gives 0.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
pub fn round_half_up(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let rounded = value.round();
    if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Round to `places` decimal digits (half away from zero).
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

// ── Classification functions ─────────────────────────────────────────

pub fn occupancy_status(count: f64, capacity: f64) -> OccupancyStatus {
    OccupancyStatus::from_percent(rounded_percent(count, capacity))
}

pub fn density_status(current_density: f64, capacity: f64) -> DensityStatus {
    DensityStatus::from_percent(rounded_percent(current_density, capacity))
}

pub fn utilization_status(flow_rate: f64, capacity: f64) -> UtilizationStatus {
    UtilizationStatus::from_percent(rounded_percent(flow_rate, capacity))
}

pub fn crowd_level(people_per_m2: f64) -> CrowdLevel {
    if !people_per_m2.is_finite() || people_per_m2 <= CROWD_SAFE_MAX {
        CrowdLevel::Safe
    } else if people_per_m2 <= CROWD_MODERATE_MAX {
        CrowdLevel::Moderate
    } else if people_per_m2 <= CROWD_RISKY_MAX {
        CrowdLevel::Risky
    } else {
        CrowdLevel::Overcrowded
    }
}

/// π r², rounded to 2 dp.
pub fn circle_area_m2(radius_m: f64) -> f64 {
    if !radius_m.is_finite() || radius_m <= 0.0 {
        return 0.0;
    }
    round_to(std::f64::consts::PI * radius_m * radius_m, 2)
}

/// People per square metre, rounded to 3 dp. An empty area reads as 0.
pub fn people_per_m2(person_count: u32, area_m2: f64) -> f64 {
    if !area_m2.is_finite() || area_m2 <= 0.0 {
        return 0.0;
    }
    round_to(f64::from(person_count) / area_m2, 3)
}

/// Keyword vote over a free-text comment. Ties and empty text are neutral.
pub fn sentiment_of(comment: &str) -> Sentiment {
    let text = comment.to_lowercase();
    let positive = POSITIVE_WORDS.iter().filter(|w| text.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| text.contains(*w)).count();
    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn density_boundaries_round_before_comparing() {
        assert_eq!(density_status(400.0, 500.0), DensityStatus::Crowded);
        // 79.8% rounds up to 80.
        assert_eq!(density_status(399.0, 500.0), DensityStatus::Crowded);
        // 79.0%
        assert_eq!(density_status(395.0, 500.0), DensityStatus::Moderate);
        assert_eq!(density_status(750.0, 1000.0), DensityStatus::Moderate);
        assert_eq!(density_status(250.0, 500.0), DensityStatus::Moderate);
        // 49.4%
        assert_eq!(density_status(247.0, 500.0), DensityStatus::Low);
    }

    #[test]
    fn half_percent_rounds_up() {
        assert_eq!(rounded_percent(159.0, 200.0), 80);
        assert_eq!(rounded_percent(1.0, 200.0), 1);
        assert_eq!(rounded_percent(1.0, 3.0), 33);
    }

    #[test]
    fn zero_capacity_reads_as_empty() {
        assert_eq!(rounded_percent(10.0, 0.0), 0);
        assert_eq!(rounded_percent(10.0, -5.0), 0);
        assert_eq!(rounded_percent(f64::NAN, 10.0), 0);
        assert_eq!(occupancy_status(10.0, 0.0), OccupancyStatus::Safe);
        assert_eq!(density_status(10.0, 0.0), DensityStatus::Low);
        assert_eq!(utilization_status(10.0, 0.0), UtilizationStatus::Low);
    }

    #[test]
    fn occupancy_bands() {
        assert_eq!(OccupancyStatus::from_percent(49), OccupancyStatus::Safe);
        assert_eq!(OccupancyStatus::from_percent(50), OccupancyStatus::Moderate);
        assert_eq!(OccupancyStatus::from_percent(74), OccupancyStatus::Moderate);
        assert_eq!(OccupancyStatus::from_percent(75), OccupancyStatus::Risky);
        assert_eq!(OccupancyStatus::from_percent(89), OccupancyStatus::Risky);
        assert_eq!(OccupancyStatus::from_percent(90), OccupancyStatus::Critical);
        assert_eq!(OccupancyStatus::from_percent(250), OccupancyStatus::Critical);
    }

    #[test]
    fn utilization_bands() {
        assert_eq!(utilization_status(49.0, 100.0), UtilizationStatus::Low);
        assert_eq!(utilization_status(50.0, 100.0), UtilizationStatus::Moderate);
        assert_eq!(utilization_status(70.0, 100.0), UtilizationStatus::High);
        assert_eq!(utilization_status(90.0, 100.0), UtilizationStatus::Critical);
    }

    #[test]
    fn severity_never_drops_as_count_grows() {
        for capacity in [1u32, 7, 100, 500, 1000] {
            let mut last_occupancy = OccupancyStatus::Safe;
            let mut last_density = DensityStatus::Low;
            let mut last_utilization = UtilizationStatus::Low;
            for count in 0..=capacity.saturating_mul(2) {
                let (c, cap) = (f64::from(count), f64::from(capacity));
                let occupancy = occupancy_status(c, cap);
                let density = density_status(c, cap);
                let utilization = utilization_status(c, cap);
                assert!(occupancy >= last_occupancy, "{count}/{capacity}");
                assert!(density >= last_density, "{count}/{capacity}");
                assert!(utilization >= last_utilization, "{count}/{capacity}");
                last_occupancy = occupancy;
                last_density = density;
                last_utilization = utilization;
            }
            assert_eq!(last_occupancy, OccupancyStatus::Critical);
            assert_eq!(last_density, DensityStatus::Crowded);
        }
    }

    #[test]
    fn every_band_is_reachable() {
        let seen: Vec<OccupancyStatus> = (0..=100).map(OccupancyStatus::from_percent).collect();
        for status in OccupancyStatus::iter() {
            assert!(seen.contains(&status), "{status} unreachable");
        }
    }

    #[test]
    fn crowd_levels_and_geometry() {
        assert!((circle_area_m2(10.0) - 314.16).abs() < 1e-9);
        assert!((people_per_m2(157, 314.16) - 0.5).abs() < 1e-9);
        assert!(people_per_m2(10, 0.0).abs() < f64::EPSILON);
        assert_eq!(crowd_level(0.5), CrowdLevel::Safe);
        assert_eq!(crowd_level(0.501), CrowdLevel::Moderate);
        assert_eq!(crowd_level(2.0), CrowdLevel::Moderate);
        assert_eq!(crowd_level(4.0), CrowdLevel::Risky);
        assert_eq!(crowd_level(4.2), CrowdLevel::Overcrowded);
    }

    #[test]
    fn sentiment_keyword_vote() {
        assert_eq!(sentiment_of("Great music, loved it"), Sentiment::Positive);
        assert_eq!(sentiment_of("Terrible queues and awful food"), Sentiment::Negative);
        assert_eq!(sentiment_of("Good stage, bad parking"), Sentiment::Neutral);
        assert_eq!(sentiment_of(""), Sentiment::Neutral);
        assert_eq!(sentiment_of("AWESOME"), Sentiment::Positive);
    }
}
