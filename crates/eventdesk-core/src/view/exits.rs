// ── Emergency exit board ──

use serde::Serialize;

use crate::aggregate::{Tally, count, count_by_enum};
use crate::classify::{UtilizationStatus, rounded_percent};
use crate::model::{EmergencyExit, ExitStatus};

/// Flow against rated capacity for an exit that declares one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitUtilization {
    pub exit_id: String,
    pub name: String,
    pub flow_rate: u32,
    pub capacity: u32,
    pub utilization_pct: u32,
    pub status: UtilizationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExitBoard {
    pub total: u64,
    pub by_status: Tally<ExitStatus>,
    pub clear: u64,
    pub moderate: u64,
    pub crowded: u64,
    pub total_capacity: u64,
    pub total_flow: u64,
    pub utilization: Vec<ExitUtilization>,
}

impl ExitBoard {
    pub fn assemble(exits: &[EmergencyExit]) -> Self {
        let by_status = count_by_enum(exits, |x| x.status);
        let utilization = exits
            .iter()
            .filter_map(|x| {
                let capacity = x.capacity?;
                let flow_rate = x.current_flow_rate.unwrap_or(0);
                let utilization_pct = rounded_percent(f64::from(flow_rate), f64::from(capacity));
                Some(ExitUtilization {
                    exit_id: x.id.clone(),
                    name: x.name.clone(),
                    flow_rate,
                    capacity,
                    utilization_pct,
                    status: UtilizationStatus::from_percent(utilization_pct),
                })
            })
            .collect();
        Self {
            total: count(exits.len()),
            clear: by_status.get(&ExitStatus::Clear),
            moderate: by_status.get(&ExitStatus::Moderate),
            crowded: by_status.get(&ExitStatus::Crowded),
            total_capacity: exits.iter().filter_map(|x| x.capacity).map(u64::from).sum(),
            total_flow: exits
                .iter()
                .filter_map(|x| x.current_flow_rate)
                .map(u64::from)
                .sum(),
            by_status,
            utilization,
        }
    }
}
