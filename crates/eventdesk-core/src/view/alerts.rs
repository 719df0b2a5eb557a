// ── Alert board ──

use serde::Serialize;

use crate::aggregate::{Tally, count, count_by_enum};
use crate::model::{Alert, AlertKind, AlertSeverity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertBoard {
    pub total: u64,
    pub active: u64,
    /// Kinds and severities count active alerts only.
    pub by_kind: Tally<AlertKind>,
    pub by_severity: Tally<AlertSeverity>,
    /// Active alerts at high or critical severity.
    pub urgent: u64,
}

impl AlertBoard {
    pub fn assemble(alerts: &[Alert]) -> Self {
        let active: Vec<&Alert> = alerts.iter().filter(|a| a.active).collect();
        Self {
            total: count(alerts.len()),
            active: count(active.len()),
            by_kind: count_by_enum(&active, |a| a.kind),
            by_severity: count_by_enum(&active, |a| a.severity),
            urgent: count(
                active
                    .iter()
                    .filter(|a| a.severity >= AlertSeverity::High)
                    .count(),
            ),
        }
    }
}
