// ── View-model assemblers ──
//
// One pure function per dashboard page. Each takes the page's current
// (already filtered) records and returns exactly the numbers its cards show.
// Nothing is cached: callers re-assemble after every fetch.

pub mod alerts;
pub mod events;
pub mod exits;
pub mod feedback;
pub mod lost_persons;
pub mod medical;
pub mod overview;
pub mod washrooms;
pub mod zones;

use serde::Serialize;

pub use alerts::AlertBoard;
pub use events::EventBoard;
pub use exits::{ExitBoard, ExitUtilization};
pub use feedback::FeedbackBoard;
pub use lost_persons::LostPersonBoard;
pub use medical::{FacilityBoard, MedicalBoard};
pub use overview::{EventOverview, ZoneOccupancy};
pub use washrooms::WashroomBoard;
pub use zones::{ZoneBoard, ZoneDensityRow};

use crate::model::{
    Alert, EmergencyExit, Event, Feedback, LostPerson, MedicalEmergency, MedicalFacility, Washroom,
    Zone,
};

/// Every board for one event, built from a single consistent fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDashboard {
    pub event_id: String,
    pub event_name: String,
    pub overview: EventOverview,
    pub zones: ZoneBoard,
    pub lost_persons: LostPersonBoard,
    pub medical: MedicalBoard,
    pub facilities: FacilityBoard,
    pub exits: ExitBoard,
    pub washrooms: WashroomBoard,
    pub feedback: FeedbackBoard,
    pub alerts: AlertBoard,
}

/// The raw collections an [`EventDashboard`] is assembled from.
#[derive(Debug, Clone)]
pub struct EventSnapshot {
    pub event: Event,
    pub zones: Vec<Zone>,
    pub lost_persons: Vec<LostPerson>,
    pub emergencies: Vec<MedicalEmergency>,
    pub facilities: Vec<MedicalFacility>,
    pub exits: Vec<EmergencyExit>,
    pub washrooms: Vec<Washroom>,
    pub feedback: Vec<Feedback>,
    pub alerts: Vec<Alert>,
}

impl EventDashboard {
    pub fn assemble(snapshot: &EventSnapshot) -> Self {
        Self {
            event_id: snapshot.event.id.clone(),
            event_name: snapshot.event.name.clone(),
            overview: EventOverview::assemble(
                Some(&snapshot.event),
                &snapshot.zones,
                &snapshot.alerts,
            ),
            zones: ZoneBoard::assemble(&snapshot.zones),
            lost_persons: LostPersonBoard::assemble(&snapshot.lost_persons),
            medical: MedicalBoard::assemble(&snapshot.emergencies),
            facilities: FacilityBoard::assemble(&snapshot.facilities),
            exits: ExitBoard::assemble(&snapshot.exits),
            washrooms: WashroomBoard::assemble(&snapshot.washrooms),
            feedback: FeedbackBoard::assemble(&snapshot.feedback),
            alerts: AlertBoard::assemble(&snapshot.alerts),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::classify::{OccupancyStatus, UtilizationStatus};
    use crate::model::{
        AlertKind, AlertSeverity, Availability, DensityStatus, EmergencyStatus, EmergencyType,
        EventStatus, ExitStatus, LostPersonStatus, Priority, Sentiment, Severity, WashroomGender,
    };

    fn zone(id: &str, people: u32, capacity: u32) -> Zone {
        Zone {
            id: id.into(),
            event_id: "EVT1".into(),
            name: format!("Zone {id}"),
            capacity,
            current_density: people,
            density_status: DensityStatus::Low,
            image_url: None,
            last_updated: None,
        }
    }

    fn event(capacity: Option<u32>, attendees: Option<u32>, status: EventStatus) -> Event {
        Event {
            id: "EVT1".into(),
            name: "Summer Fest".into(),
            description: None,
            location: None,
            start_time: None,
            end_time: None,
            capacity,
            attendees_count: attendees,
            areas: Vec::new(),
            organizer_id: None,
            status,
            created_at: None,
        }
    }

    fn emergency(status: EmergencyStatus, response: Option<u32>) -> MedicalEmergency {
        MedicalEmergency {
            id: "ME".into(),
            event_id: "EVT1".into(),
            emergency_type: EmergencyType::Heatstroke,
            severity: Severity::Moderate,
            patient_name: None,
            patient_age: None,
            description: None,
            location: None,
            status,
            responder_name: None,
            response_time_min: response,
            reported_at: None,
        }
    }

    fn exit(status: ExitStatus, capacity: Option<u32>, flow: Option<u32>) -> EmergencyExit {
        EmergencyExit {
            id: "X".into(),
            event_id: "EVT1".into(),
            name: "Gate".into(),
            location: None,
            status,
            capacity,
            current_flow_rate: flow,
            last_updated: None,
        }
    }

    fn alert(kind: AlertKind, severity: AlertSeverity, active: bool) -> Alert {
        Alert {
            id: "ALT".into(),
            event_id: "EVT1".into(),
            title: "Notice".into(),
            message: "Details".into(),
            kind,
            severity,
            active,
            created_at: None,
        }
    }

    #[test]
    fn overview_scenario() {
        let zones = [zone("a", 750, 1000), zone("b", 95, 100), zone("c", 10, 100)];
        let ev = event(Some(5000), Some(1250), EventStatus::Live);
        let alerts = [
            alert(AlertKind::Warning, AlertSeverity::High, true),
            alert(AlertKind::Info, AlertSeverity::Low, false),
        ];
        let overview = EventOverview::assemble(Some(&ev), &zones, &alerts);

        let pcts: Vec<u32> = overview.zones.iter().map(|z| z.occupancy_pct).collect();
        assert_eq!(pcts, vec![75, 95, 10]);
        assert_eq!(overview.zones[0].status, OccupancyStatus::Risky);
        assert_eq!(overview.zones[1].status, OccupancyStatus::Critical);
        assert_eq!(overview.critical_zones, 2);
        assert_eq!(overview.safe_zones, 1);
        // (75 + 95 + 10) / 3 = 60
        assert_eq!(overview.average_occupancy_pct, 60);
        assert_eq!(overview.peak_occupancy_pct, 95);
        assert_eq!(overview.attendance_pct, Some(25));
        assert_eq!(overview.by_status.get(&OccupancyStatus::Moderate), 0);
        assert_eq!(overview.active_alerts, 1);
    }

    #[test]
    fn overview_without_zones_or_capacity() {
        let ev = event(Some(0), Some(10), EventStatus::Upcoming);
        let overview = EventOverview::assemble(Some(&ev), &[], &[]);
        assert_eq!(overview.zone_count, 0);
        assert_eq!(overview.average_occupancy_pct, 0);
        assert_eq!(overview.peak_occupancy_pct, 0);
        assert_eq!(overview.attendance_pct, None);
        assert_eq!(overview.by_status.len(), 4);
        assert_eq!(overview.active_alerts, 0);
    }

    #[test]
    fn alert_board_counts_only_active_alerts_by_kind() {
        let board = AlertBoard::assemble(&[
            alert(AlertKind::Emergency, AlertSeverity::Critical, true),
            alert(AlertKind::Warning, AlertSeverity::High, true),
            alert(AlertKind::Info, AlertSeverity::Low, true),
            alert(AlertKind::Emergency, AlertSeverity::Critical, false),
        ]);
        assert_eq!(board.total, 4);
        assert_eq!(board.active, 3);
        assert_eq!(board.urgent, 2);
        assert_eq!(board.by_kind.get(&AlertKind::Emergency), 1);
        assert_eq!(board.by_severity.get(&AlertSeverity::Medium), 0);
        assert_eq!(board.by_severity.len(), 4);
    }

    #[test]
    fn zone_board_recomputes_labels() {
        let board = ZoneBoard::assemble(&[zone("a", 750, 1000), zone("b", 400, 500)]);
        let statuses: Vec<DensityStatus> = board.zones.iter().map(|z| z.status).collect();
        assert_eq!(statuses, vec![DensityStatus::Moderate, DensityStatus::Crowded]);
        assert_eq!(board.by_status.get(&DensityStatus::Low), 0);
        assert_eq!(board.total_people, 1150);
    }

    #[test]
    fn lost_person_board_counts_open_cases() {
        let statuses = [
            LostPersonStatus::Missing,
            LostPersonStatus::Missing,
            LostPersonStatus::Searching,
            LostPersonStatus::Found,
            LostPersonStatus::Resolved,
        ];
        let reports: Vec<LostPerson> = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| LostPerson {
                id: i.to_string(),
                event_id: "EVT1".into(),
                name: "X".into(),
                age: if i == 0 { 8 } else { 30 },
                gender: None,
                description: None,
                last_seen_location: None,
                last_seen_time: None,
                photo_url: None,
                reporter_name: None,
                reporter_phone: None,
                status: *status,
                priority: Priority::for_age(if i == 0 { 8 } else { 30 }),
                reported_at: None,
            })
            .collect();
        let board = LostPersonBoard::assemble(&reports);
        assert_eq!(board.total, 5);
        assert_eq!(board.by_status.get(&LostPersonStatus::Missing), 2);
        assert_eq!(board.open, 3);
        assert_eq!(board.critical_open, 1);
        assert_eq!(board.by_priority.get(&Priority::High), 0);
    }

    #[test]
    fn medical_board_partitions_statuses() {
        let board = MedicalBoard::assemble(&[
            emergency(EmergencyStatus::Reported, None),
            emergency(EmergencyStatus::OnScene, Some(4)),
            emergency(EmergencyStatus::Transported, Some(9)),
            emergency(EmergencyStatus::Resolved, Some(6)),
        ]);
        assert_eq!(board.active, 2);
        assert_eq!(board.resolved, 2);
        assert!((board.average_response_min - 6.3).abs() < 1e-9);

        let empty = MedicalBoard::assemble(&[]);
        assert!(empty.average_response_min.abs() < f64::EPSILON);
        assert_eq!(empty.by_status.len(), 5);
    }

    #[test]
    fn exit_board_skips_utilization_without_capacity() {
        let board = ExitBoard::assemble(&[
            exit(ExitStatus::Clear, Some(100), Some(95)),
            exit(ExitStatus::Crowded, Some(200), Some(120)),
            exit(ExitStatus::Clear, None, Some(40)),
        ]);
        assert_eq!(board.clear, 2);
        assert_eq!(board.moderate, 0);
        assert_eq!(board.crowded, 1);
        assert_eq!(board.total_capacity, 300);
        assert_eq!(board.total_flow, 255);
        let util: Vec<(u32, UtilizationStatus)> = board
            .utilization
            .iter()
            .map(|u| (u.utilization_pct, u.status))
            .collect();
        assert_eq!(
            util,
            vec![(95, UtilizationStatus::Critical), (60, UtilizationStatus::Moderate)]
        );
    }

    #[test]
    fn washroom_board_sums_available_capacity() {
        let wash = |availability, capacity| Washroom {
            id: "W".into(),
            event_id: "EVT1".into(),
            name: "Block".into(),
            gender: WashroomGender::Unisex,
            floor_level: None,
            capacity,
            availability,
            location_details: None,
        };
        let board = WashroomBoard::assemble(&[
            wash(Availability::Available, 10),
            wash(Availability::Occupied, 6),
            wash(Availability::Available, 4),
        ]);
        assert_eq!(board.total_capacity, 20);
        assert_eq!(board.available_capacity, 14);
        assert_eq!(board.by_availability.get(&Availability::Maintenance), 0);
        assert_eq!(board.by_gender.get(&WashroomGender::Unisex), 3);
    }

    #[test]
    fn feedback_board_scenario() {
        let fb = |rating, sentiment| Feedback {
            id: "F".into(),
            event_id: "EVT1".into(),
            user_id: None,
            rating,
            comment: None,
            category: None,
            sentiment,
            sentiment_inferred: false,
            submitted_at: None,
        };
        let board = FeedbackBoard::assemble(&[
            fb(5, Sentiment::Positive),
            fb(3, Sentiment::Neutral),
            fb(2, Sentiment::Negative),
            fb(4, Sentiment::Positive),
        ]);
        assert_eq!(board.average_rating_label(), "3.5");
        assert_eq!(board.positive, 2);
        assert_eq!(board.negative, 1);
        assert_eq!(board.sentiment.percentages[&Sentiment::Positive], 50);

        let empty = FeedbackBoard::assemble(&[]);
        assert_eq!(empty.average_rating_label(), "0.0");
        assert_eq!(empty.ratings.len(), 5);
    }

    #[test]
    fn event_board_totals() {
        let board = EventBoard::assemble(&[
            event(Some(1000), Some(400), EventStatus::Live),
            event(None, None, EventStatus::Upcoming),
        ]);
        assert_eq!(board.total, 2);
        assert_eq!(board.live, 1);
        assert_eq!(board.total_capacity, 1000);
        assert_eq!(board.by_status.get(&EventStatus::Completed), 0);
    }
}
