// ── Washroom board ──

use serde::Serialize;

use crate::aggregate::{Tally, count, count_by_enum};
use crate::model::{Availability, Washroom, WashroomGender};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WashroomBoard {
    pub total: u64,
    pub by_availability: Tally<Availability>,
    pub by_gender: Tally<WashroomGender>,
    pub total_capacity: u64,
    /// Capacity of the facilities currently marked available.
    pub available_capacity: u64,
}

impl WashroomBoard {
    pub fn assemble(washrooms: &[Washroom]) -> Self {
        Self {
            total: count(washrooms.len()),
            by_availability: count_by_enum(washrooms, |w| w.availability),
            by_gender: count_by_enum(washrooms, |w| w.gender),
            total_capacity: washrooms.iter().map(|w| u64::from(w.capacity)).sum(),
            available_capacity: washrooms
                .iter()
                .filter(|w| w.availability == Availability::Available)
                .map(|w| u64::from(w.capacity))
                .sum(),
        }
    }
}
