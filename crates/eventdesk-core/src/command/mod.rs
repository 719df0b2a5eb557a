// ── Command API ──
//
// All write operations flow through a unified `Command` enum. The desk
// routes each variant to its endpoint, then re-fetches the affected
// collection so callers always render backend truth.

pub mod requests;

use serde::Serialize;

use crate::model::{
    Alert, Availability, CrowdReading, DensityStatus, EmergencyExit, EmergencyStatus, Event,
    EventStatus, ExitStatus, Feedback, LostPerson, LostPersonStatus, MedicalEmergency,
    MedicalFacility, Washroom, WeatherReading, Zone,
};

pub use requests::{
    AlertRequest, CrowdReadingRequest, EmergencyReport, EventRequest, ExitRequest,
    FacilityRequest, FeedbackSubmission, LostPersonReport, PersonCountRequest, WashroomRequest,
    WeatherReport, ZoneRequest,
};

/// All possible write operations against the backend.
///
/// Status transitions are not guarded: any status may be set from any other.
#[derive(Debug, Clone)]
pub enum Command {
    // ── Events ───────────────────────────────────────────────────────
    CreateEvent(EventRequest),
    UpdateEvent {
        id: String,
        update: EventRequest,
    },
    SetEventStatus {
        id: String,
        status: EventStatus,
    },
    DeleteEvent {
        id: String,
    },

    // ── Zones ────────────────────────────────────────────────────────
    CreateZone(ZoneRequest),
    UpdateZone {
        id: String,
        update: ZoneRequest,
    },
    /// Record a new head count; without an explicit label the backend
    /// derives one.
    SetZoneDensity {
        id: String,
        current_density: u32,
        status: Option<DensityStatus>,
    },
    DeleteZone {
        id: String,
    },

    // ── Lost persons ─────────────────────────────────────────────────
    ReportLostPerson(LostPersonReport),
    SetLostPersonStatus {
        id: String,
        status: LostPersonStatus,
    },
    UploadLostPersonPhoto {
        id: String,
        file_name: String,
        bytes: Vec<u8>,
    },
    DeleteLostPersonPhoto {
        id: String,
    },

    // ── Medical ──────────────────────────────────────────────────────
    ReportEmergency(EmergencyReport),
    SetEmergencyStatus {
        id: String,
        status: EmergencyStatus,
        responder_name: Option<String>,
        response_time_min: Option<u32>,
    },
    CreateFacility(FacilityRequest),
    UpdateFacility {
        id: String,
        update: FacilityRequest,
    },
    DeleteFacility {
        id: String,
    },

    // ── Exits ────────────────────────────────────────────────────────
    CreateExit(ExitRequest),
    UpdateExit {
        id: String,
        update: ExitRequest,
    },
    SetExitStatus {
        id: String,
        status: ExitStatus,
    },
    DeleteExit {
        id: String,
    },

    // ── Washrooms ────────────────────────────────────────────────────
    CreateWashroom(WashroomRequest),
    UpdateWashroom {
        id: String,
        update: WashroomRequest,
    },
    SetWashroomStatus {
        id: String,
        availability: Availability,
    },
    DeleteWashroom {
        id: String,
    },

    // ── Alerts ───────────────────────────────────────────────────────
    RaiseAlert(AlertRequest),
    DeactivateAlert {
        id: String,
    },
    DeleteAlert {
        id: String,
    },
    ReportWeather(WeatherReport),

    // ── Feedback & crowd ─────────────────────────────────────────────
    SubmitFeedback(FeedbackSubmission),
    RecordCrowdReading(CrowdReadingRequest),
}

/// The record a mutation produced, when the backend returned one.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Record {
    Event(Event),
    Zone(Zone),
    LostPerson(LostPerson),
    MedicalEmergency(MedicalEmergency),
    MedicalFacility(MedicalFacility),
    EmergencyExit(EmergencyExit),
    Washroom(Washroom),
    Feedback(Feedback),
    CrowdReading(CrowdReading),
    Alert(Alert),
    WeatherReading(WeatherReading),
}

/// A freshly fetched collection, scoped to the mutated record's event.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum Collection {
    Events(Vec<Event>),
    Zones(Vec<Zone>),
    LostPersons(Vec<LostPerson>),
    MedicalEmergencies(Vec<MedicalEmergency>),
    MedicalFacilities(Vec<MedicalFacility>),
    EmergencyExits(Vec<EmergencyExit>),
    Washrooms(Vec<Washroom>),
    Feedback(Vec<Feedback>),
    CrowdReadings(Vec<CrowdReading>),
    Alerts(Vec<Alert>),
    /// The event's latest weather reading.
    Weather(Vec<WeatherReading>),
}

impl Collection {
    pub fn len(&self) -> usize {
        match self {
            Self::Events(v) => v.len(),
            Self::Zones(v) => v.len(),
            Self::LostPersons(v) => v.len(),
            Self::MedicalEmergencies(v) => v.len(),
            Self::MedicalFacilities(v) => v.len(),
            Self::EmergencyExits(v) => v.len(),
            Self::Washrooms(v) => v.len(),
            Self::Feedback(v) => v.len(),
            Self::CrowdReadings(v) => v.len(),
            Self::Alerts(v) => v.len(),
            Self::Weather(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of a command execution.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResult {
    pub record: Option<Record>,
    /// Backend acknowledgement text for endpoints that return one.
    pub message: Option<String>,
    pub refreshed: Collection,
}
