// ── Lost-person board ──

use serde::Serialize;

use crate::aggregate::{Tally, count, count_by_enum};
use crate::model::{LostPerson, LostPersonStatus, Priority};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LostPersonBoard {
    pub total: u64,
    pub by_status: Tally<LostPersonStatus>,
    pub by_priority: Tally<Priority>,
    /// Missing or searching.
    pub open: u64,
    pub critical_open: u64,
}

impl LostPersonBoard {
    pub fn assemble(reports: &[LostPerson]) -> Self {
        let open: Vec<&LostPerson> = reports.iter().filter(|r| r.status.is_open()).collect();
        Self {
            total: count(reports.len()),
            by_status: count_by_enum(reports, |r| r.status),
            by_priority: count_by_enum(reports, |r| r.priority),
            open: count(open.len()),
            critical_open: count(
                open.iter()
                    .filter(|r| r.priority == Priority::Critical)
                    .count(),
            ),
        }
    }
}
