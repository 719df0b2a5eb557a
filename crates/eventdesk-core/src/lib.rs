//! Domain layer between `eventdesk-api` and the operator CLI.
//!
//! This crate owns the event-operations vocabulary and every number the
//! dashboards show:
//!
//! - **[`Desk`]**: Facade over one backend. Typed, filterable reads for
//!   each resource, the [`Command`] write path (validate, send, re-fetch the
//!   affected collection) and [`Desk::event_dashboard`], which fetches one
//!   event's collections concurrently and assembles every board.
//!
//! - **Domain model** ([`model`]): Events, zones, lost persons, medical
//!   emergencies and facilities, exits, washrooms, feedback, crowd readings
//!   and alerts, with closed enums for every status field.
//!
//! - **Derivation** ([`classify`], [`aggregate`]): Occupancy, density,
//!   utilization and crowd-level bands, rounding rules, keyword sentiment,
//!   and the category tallies and averages the boards are built from.
//!
//! - **View models** ([`view`]): One pure assembler per dashboard page.

pub mod aggregate;
pub mod classify;
pub mod command;
pub mod config;
pub mod convert;
pub mod desk;
pub mod error;
pub mod filter;
pub mod model;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use aggregate::{SentimentDistribution, Tally};
pub use classify::{OccupancyStatus, UtilizationStatus};
pub use command::requests::*;
pub use command::{Collection, Command, CommandResult, Record};
pub use config::{DEFAULT_BACKEND_URL, DeskConfig, TlsVerification};
pub use desk::{Desk, RECENT_FEEDBACK_LIMIT, ViewKey, ViewSlot};
pub use error::CoreError;
pub use filter::{Filterable, RecordFilter};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Alert, AlertKind, AlertSeverity, Area, Availability, CrowdLevel, CrowdReading, DensityStatus,
    EmergencyExit, EmergencyStats, EmergencyStatus, EmergencyType, Event, EventStatus, ExitStatus,
    FacilityType, Feedback, FeedbackStats, Location, LostPerson, LostPersonStats,
    LostPersonStatus, MedicalEmergency, MedicalFacility, PersonCount, Priority, Sentiment,
    Severity, Washroom, WashroomGender, WeatherReading, Zone,
};

pub use view::{
    AlertBoard, EventBoard, EventDashboard, EventOverview, EventSnapshot, ExitBoard,
    ExitUtilization, FacilityBoard, FeedbackBoard, LostPersonBoard, MedicalBoard, WashroomBoard,
    ZoneBoard, ZoneDensityRow, ZoneOccupancy,
};

// The retry budget is part of `DeskConfig`.
pub use eventdesk_api::RetryPolicy;
