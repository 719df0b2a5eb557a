// ── Zone density board ──

use serde::Serialize;

use crate::aggregate::{Tally, count, count_by_enum};
use crate::classify::rounded_percent;
use crate::model::{DensityStatus, Zone};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneDensityRow {
    pub zone_id: String,
    pub name: String,
    pub people: u32,
    pub capacity: u32,
    pub density_pct: u32,
    /// Always recomputed from the counts, whatever label the backend stored.
    pub status: DensityStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneBoard {
    pub total: u64,
    pub zones: Vec<ZoneDensityRow>,
    pub by_status: Tally<DensityStatus>,
    pub total_people: u64,
    pub total_capacity: u64,
}

impl ZoneBoard {
    pub fn assemble(zones: &[Zone]) -> Self {
        let rows: Vec<ZoneDensityRow> = zones
            .iter()
            .map(|z| {
                let density_pct =
                    rounded_percent(f64::from(z.current_density), f64::from(z.capacity));
                ZoneDensityRow {
                    zone_id: z.id.clone(),
                    name: z.name.clone(),
                    people: z.current_density,
                    capacity: z.capacity,
                    density_pct,
                    status: DensityStatus::from_percent(density_pct),
                }
            })
            .collect();
        let by_status = count_by_enum(&rows, |r| r.status);
        Self {
            total: count(rows.len()),
            total_people: zones.iter().map(|z| u64::from(z.current_density)).sum(),
            total_capacity: zones.iter().map(|z| u64::from(z.capacity)).sum(),
            by_status,
            zones: rows,
        }
    }
}
