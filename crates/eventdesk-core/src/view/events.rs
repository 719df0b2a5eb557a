// ── Events list board ──

use serde::Serialize;

use crate::aggregate::{Tally, count, count_by_enum};
use crate::model::{Event, EventStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBoard {
    pub total: u64,
    pub by_status: Tally<EventStatus>,
    pub live: u64,
    pub total_capacity: u64,
    pub total_attendees: u64,
}

impl EventBoard {
    pub fn assemble(events: &[Event]) -> Self {
        let by_status = count_by_enum(events, |e| e.status);
        Self {
            total: count(events.len()),
            live: by_status.get(&EventStatus::Live),
            total_capacity: events.iter().filter_map(|e| e.capacity).map(u64::from).sum(),
            total_attendees: events
                .iter()
                .filter_map(|e| e.attendees_count)
                .map(u64::from)
                .sum(),
            by_status,
        }
    }
}
