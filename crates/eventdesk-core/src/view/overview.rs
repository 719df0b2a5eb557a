// ── Event dashboard overview ──

use serde::Serialize;

use crate::aggregate::{Tally, average, count, count_by_enum, peak};
use crate::classify::{OccupancyStatus, round_half_up, rounded_percent};
use crate::model::{Alert, Event, Zone};

/// One zone's fill level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneOccupancy {
    pub zone_id: String,
    pub name: String,
    pub people: u32,
    pub capacity: u32,
    pub occupancy_pct: u32,
    pub status: OccupancyStatus,
}

impl ZoneOccupancy {
    pub fn of(zone: &Zone) -> Self {
        let occupancy_pct =
            rounded_percent(f64::from(zone.current_density), f64::from(zone.capacity));
        Self {
            zone_id: zone.id.clone(),
            name: zone.name.clone(),
            people: zone.current_density,
            capacity: zone.capacity,
            occupancy_pct,
            status: OccupancyStatus::from_percent(occupancy_pct),
        }
    }
}

/// Headline numbers for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventOverview {
    pub zone_count: u64,
    pub zones: Vec<ZoneOccupancy>,
    pub by_status: Tally<OccupancyStatus>,
    /// Zones at risky or critical occupancy.
    pub critical_zones: u64,
    pub safe_zones: u64,
    /// Mean of the per-zone percentages, rounded.
    pub average_occupancy_pct: u32,
    pub peak_occupancy_pct: u32,
    pub total_people: u64,
    pub total_capacity: u64,
    /// `attendees_count / capacity`, when the event declares both.
    pub attendance_pct: Option<u32>,
    pub active_alerts: u64,
}

impl EventOverview {
    pub fn assemble(event: Option<&Event>, zones: &[Zone], alerts: &[Alert]) -> Self {
        let rows: Vec<ZoneOccupancy> = zones.iter().map(ZoneOccupancy::of).collect();
        let by_status = count_by_enum(&rows, |r| r.status);
        let critical_zones = count(rows.iter().filter(|r| r.status.needs_attention()).count());
        let mean_pct = average(&rows, |r| f64::from(r.occupancy_pct));

        let attendance_pct = event.and_then(|e| match (e.attendees_count, e.capacity) {
            (Some(attendees), Some(capacity)) if capacity > 0 => {
                Some(rounded_percent(f64::from(attendees), f64::from(capacity)))
            }
            _ => None,
        });

        Self {
            zone_count: count(rows.len()),
            critical_zones,
            safe_zones: by_status.get(&OccupancyStatus::Safe),
            average_occupancy_pct: round_half_up(mean_pct),
            peak_occupancy_pct: peak(&rows, |r| r.occupancy_pct),
            total_people: zones.iter().map(|z| u64::from(z.current_density)).sum(),
            total_capacity: zones.iter().map(|z| u64::from(z.capacity)).sum(),
            attendance_pct,
            active_alerts: count(alerts.iter().filter(|a| a.active).count()),
            by_status,
            zones: rows,
        }
    }
}
