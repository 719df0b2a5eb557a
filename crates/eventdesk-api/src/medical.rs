// Medical endpoints: `/medical-emergencies/` and `/medical-facilities/`

use crate::client::BackendClient;
use crate::error::Error;
use crate::types::{
    EmergencyStatsResponse, EmergencyStatusUpdate, EventScope, MedicalEmergencyPayload,
    MedicalEmergencyQuery, MedicalEmergencyResponse, MedicalFacilityPayload,
    MedicalFacilityResponse,
};

const EMERGENCIES: &str = "medical-emergencies";
const FACILITIES: &str = "medical-facilities";

impl BackendClient {
    // ── Emergencies ──────────────────────────────────────────────────

    /// `GET /medical-emergencies/?event_id=&status=&severity=&emergency_type=`
    pub async fn list_medical_emergencies(
        &self,
        query: &MedicalEmergencyQuery,
    ) -> Result<Vec<MedicalEmergencyResponse>, Error> {
        self.get_with_params(&[EMERGENCIES, ""], query).await
    }

    pub async fn get_medical_emergency(&self, id: &str) -> Result<MedicalEmergencyResponse, Error> {
        self.get(&[EMERGENCIES, id]).await
    }

    pub async fn create_medical_emergency(
        &self,
        body: &MedicalEmergencyPayload,
    ) -> Result<MedicalEmergencyResponse, Error> {
        self.post(&[EMERGENCIES, ""], body).await
    }

    /// `PATCH /medical-emergencies/{id}/status?new_status=&responder_name=&response_time=`
    pub async fn set_medical_emergency_status(
        &self,
        id: &str,
        update: &EmergencyStatusUpdate,
    ) -> Result<MedicalEmergencyResponse, Error> {
        self.patch_with_params(&[EMERGENCIES, id, "status"], update).await
    }

    /// `GET /medical-emergencies/stats/event/{event_id}`
    pub async fn medical_emergency_stats(
        &self,
        event_id: &str,
    ) -> Result<EmergencyStatsResponse, Error> {
        self.get(&[EMERGENCIES, "stats", "event", event_id]).await
    }

    // ── Facilities ───────────────────────────────────────────────────

    pub async fn list_medical_facilities(
        &self,
        scope: &EventScope,
    ) -> Result<Vec<MedicalFacilityResponse>, Error> {
        self.get_with_params(&[FACILITIES, ""], scope).await
    }

    pub async fn get_medical_facility(&self, id: &str) -> Result<MedicalFacilityResponse, Error> {
        self.get(&[FACILITIES, id]).await
    }

    pub async fn create_medical_facility(
        &self,
        body: &MedicalFacilityPayload,
    ) -> Result<MedicalFacilityResponse, Error> {
        self.post(&[FACILITIES, ""], body).await
    }

    pub async fn update_medical_facility(
        &self,
        id: &str,
        body: &MedicalFacilityPayload,
    ) -> Result<MedicalFacilityResponse, Error> {
        self.put(&[FACILITIES, id], body).await
    }

    pub async fn delete_medical_facility(&self, id: &str) -> Result<(), Error> {
        self.delete(&[FACILITIES, id]).await
    }
}
