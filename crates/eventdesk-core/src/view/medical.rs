// ── Medical boards ──

use serde::Serialize;

use crate::aggregate::{Tally, average_present, count, count_by_enum};
use crate::classify::round_to;
use crate::model::{
    EmergencyStatus, EmergencyType, FacilityType, MedicalEmergency, MedicalFacility, Severity,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicalBoard {
    pub total: u64,
    /// Reported, dispatched or on scene.
    pub active: u64,
    /// Transported or resolved.
    pub resolved: u64,
    pub by_severity: Tally<Severity>,
    pub by_type: Tally<EmergencyType>,
    pub by_status: Tally<EmergencyStatus>,
    /// Minutes, one decimal; 0 when no case records a response time.
    pub average_response_min: f64,
}

impl MedicalBoard {
    pub fn assemble(emergencies: &[MedicalEmergency]) -> Self {
        let by_status = count_by_enum(emergencies, |e| e.status);
        let active = by_status
            .iter()
            .filter(|(s, _)| s.is_active())
            .map(|(_, n)| n)
            .sum();
        let resolved = by_status
            .iter()
            .filter(|(s, _)| s.is_closed())
            .map(|(_, n)| n)
            .sum();
        let average = average_present(emergencies, |e| e.response_time_min.map(f64::from));
        Self {
            total: count(emergencies.len()),
            active,
            resolved,
            by_severity: count_by_enum(emergencies, |e| e.severity),
            by_type: count_by_enum(emergencies, |e| e.emergency_type),
            by_status,
            average_response_min: round_to(average, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityBoard {
    pub total: u64,
    pub by_type: Tally<FacilityType>,
}

impl FacilityBoard {
    pub fn assemble(facilities: &[MedicalFacility]) -> Self {
        Self {
            total: count(facilities.len()),
            by_type: count_by_enum(facilities, |f| f.facility_type),
        }
    }
}
