// ── Domain model ──
//
// Typed records built from the backend's wire shapes. Every status-like
// field is a closed enum; see `convert` for how wire strings map onto them.

pub mod alert;
pub mod common;
pub mod crowd;
pub mod event;
pub mod exit;
pub mod feedback;
pub mod lost_person;
pub mod medical;
pub mod washroom;
pub mod zone;

pub use alert::{Alert, AlertKind, AlertSeverity, WeatherReading};
pub use common::{Area, Location};
pub use crowd::{CrowdLevel, CrowdReading, PersonCount};
pub use event::{Event, EventStatus};
pub use exit::{EmergencyExit, ExitStatus};
pub use feedback::{Feedback, FeedbackStats, Sentiment};
pub use lost_person::{LostPerson, LostPersonStats, LostPersonStatus, Priority};
pub use medical::{
    EmergencyStats, EmergencyStatus, EmergencyType, FacilityType, MedicalEmergency,
    MedicalFacility, Severity,
};
pub use washroom::{Availability, Washroom, WashroomGender};
pub use zone::{DensityStatus, Zone};
