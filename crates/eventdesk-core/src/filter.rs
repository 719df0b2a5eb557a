// ── Record filters ──
//
// The list pages filter by event, status, priority and a free-text search
// over name/location. The same `RecordFilter` is pushed to the backend where
// an endpoint supports it and re-applied locally, so the result is identical
// whichever side did the work.

use serde::{Deserialize, Serialize};

use crate::model::{
    Alert, CrowdReading, EmergencyExit, Event, Feedback, LostPerson, MedicalEmergency,
    MedicalFacility, Washroom, Zone,
};

/// Fields a record exposes to [`RecordFilter`].
pub trait Filterable {
    /// Owning event (an event's own id for events).
    fn event_id(&self) -> Option<&str>;
    /// Current status label, when the record has one.
    fn status_label(&self) -> Option<&str>;
    fn priority_label(&self) -> Option<&str> {
        None
    }
    /// Text matched by the free-text search.
    fn search_fields(&self) -> Vec<&str>;
}

/// Filter criteria; every `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub event_id: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
}

impl RecordFilter {
    pub fn for_event(event_id: impl Into<String>) -> Self {
        Self {
            event_id: Some(event_id.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn matches<R: Filterable>(&self, record: &R) -> bool {
        let event_ok = match (self.event_id.as_deref(), record.event_id()) {
            (Some(want), Some(have)) => want == have,
            _ => true,
        };
        let status_ok = self.status.as_deref().is_none_or(|want| {
            record
                .status_label()
                .is_some_and(|s| s.eq_ignore_ascii_case(want))
        });
        let priority_ok = self.priority.as_deref().is_none_or(|want| {
            record
                .priority_label()
                .is_some_and(|p| p.eq_ignore_ascii_case(want))
        });
        event_ok && status_ok && priority_ok && self.search_matches(record)
    }

    fn search_matches<R: Filterable>(&self, record: &R) -> bool {
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            _ => true,
        }
    }

    /// Keep the matching records, preserving order.
    pub fn apply<R: Filterable>(&self, records: Vec<R>) -> Vec<R> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

// ── Filterable impls ───────────────────────────────────────────────

impl Filterable for Alert {
    fn event_id(&self) -> Option<&str> {
        Some(&self.event_id)
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.state_label())
    }
    fn priority_label(&self) -> Option<&str> {
        Some(self.severity.as_ref())
    }
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.message.as_str()]
    }
}

impl Filterable for Event {
    fn event_id(&self) -> Option<&str> {
        Some(&self.id)
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_ref())
    }
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.location.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Filterable for Zone {
    fn event_id(&self) -> Option<&str> {
        Some(&self.event_id)
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.density_status.as_ref())
    }
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Filterable for LostPerson {
    fn event_id(&self) -> Option<&str> {
        Some(&self.event_id)
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_ref())
    }
    fn priority_label(&self) -> Option<&str> {
        Some(self.priority.as_ref())
    }
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.last_seen_location.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Filterable for MedicalEmergency {
    fn event_id(&self) -> Option<&str> {
        Some(&self.event_id)
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_ref())
    }
    fn priority_label(&self) -> Option<&str> {
        Some(self.severity.as_ref())
    }
    fn search_fields(&self) -> Vec<&str> {
        [self.patient_name.as_deref(), self.location.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Filterable for MedicalFacility {
    fn event_id(&self) -> Option<&str> {
        Some(&self.event_id)
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.facility_type.as_ref())
    }
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.address.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Filterable for EmergencyExit {
    fn event_id(&self) -> Option<&str> {
        Some(&self.event_id)
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_ref())
    }
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.location.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Filterable for Washroom {
    fn event_id(&self) -> Option<&str> {
        Some(&self.event_id)
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.availability.as_ref())
    }
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.location_details.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Filterable for Feedback {
    fn event_id(&self) -> Option<&str> {
        Some(&self.event_id)
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.sentiment.as_ref())
    }
    fn search_fields(&self) -> Vec<&str> {
        [self.comment.as_deref(), self.category.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Filterable for CrowdReading {
    fn event_id(&self) -> Option<&str> {
        Some(&self.event_id)
    }
    fn status_label(&self) -> Option<&str> {
        Some(self.level.as_ref())
    }
    fn search_fields(&self) -> Vec<&str> {
        vec![self.area_name.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AlertKind, AlertSeverity, LostPersonStatus, Priority};

    fn person(id: &str, event: &str, status: LostPersonStatus, priority: Priority) -> LostPerson {
        LostPerson {
            id: id.into(),
            event_id: event.into(),
            name: format!("Person {id}"),
            age: 30,
            gender: None,
            description: None,
            last_seen_location: Some("Main Stage left".into()),
            last_seen_time: None,
            photo_url: None,
            reporter_name: None,
            reporter_phone: None,
            status,
            priority,
            reported_at: None,
        }
    }

    fn fixtures() -> Vec<LostPerson> {
        vec![
            person("1", "EVT1", LostPersonStatus::Missing, Priority::Critical),
            person("2", "EVT1", LostPersonStatus::Found, Priority::Medium),
            person("3", "EVT2", LostPersonStatus::Missing, Priority::Medium),
        ]
    }

    fn ids(records: &[LostPerson]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        assert_eq!(RecordFilter::default().apply(fixtures()).len(), 3);
    }

    #[test]
    fn criteria_combine() {
        let filter = RecordFilter::for_event("EVT1").with_status("MISSING");
        assert_eq!(ids(&filter.apply(fixtures())), vec!["1"]);

        let filter = RecordFilter::default().with_priority("medium");
        assert_eq!(ids(&filter.apply(fixtures())), vec!["2", "3"]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_location() {
        let filter = RecordFilter::default().with_search("main STAGE");
        assert_eq!(filter.apply(fixtures()).len(), 3);

        let filter = RecordFilter::default().with_search("person 2");
        assert_eq!(ids(&filter.apply(fixtures())), vec!["2"]);

        let filter = RecordFilter::default().with_search("   ");
        assert_eq!(filter.apply(fixtures()).len(), 3);
    }

    #[test]
    fn alerts_filter_on_state_and_severity() {
        let alert = |id: &str, severity, active| Alert {
            id: id.into(),
            event_id: "EVT1".into(),
            title: "Gate 3 closed".into(),
            message: "Use the north gate".into(),
            kind: AlertKind::Info,
            severity,
            active,
            created_at: None,
        };
        let alerts = vec![
            alert("a", AlertSeverity::Low, true),
            alert("b", AlertSeverity::Critical, true),
            alert("c", AlertSeverity::Critical, false),
        ];

        let filter = RecordFilter::default().with_status("active").with_priority("critical");
        let kept: Vec<String> = filter.apply(alerts.clone()).into_iter().map(|a| a.id).collect();
        assert_eq!(kept, vec!["b"]);

        let filter = RecordFilter::default().with_search("NORTH gate");
        assert_eq!(filter.apply(alerts).len(), 3);
    }
}
