// Emergency-exit endpoints: `/emergency-exits/`

use serde::Serialize;

use crate::client::BackendClient;
use crate::error::Error;
use crate::types::{EmergencyExitPayload, EmergencyExitResponse, EventScope};

const EXITS: &str = "emergency-exits";

impl BackendClient {
    pub async fn list_exits(
        &self,
        scope: &EventScope,
    ) -> Result<Vec<EmergencyExitResponse>, Error> {
        self.get_with_params(&[EXITS, ""], scope).await
    }

    pub async fn get_exit(&self, id: &str) -> Result<EmergencyExitResponse, Error> {
        self.get(&[EXITS, id]).await
    }

    pub async fn create_exit(
        &self,
        body: &EmergencyExitPayload,
    ) -> Result<EmergencyExitResponse, Error> {
        self.post(&[EXITS, ""], body).await
    }

    pub async fn update_exit(
        &self,
        id: &str,
        body: &EmergencyExitPayload,
    ) -> Result<EmergencyExitResponse, Error> {
        self.put(&[EXITS, id], body).await
    }

    /// `PATCH /emergency-exits/{id}/status?status=` (clear | moderate | crowded)
    pub async fn set_exit_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<EmergencyExitResponse, Error> {
        #[derive(Serialize)]
        struct Params<'a> {
            status: &'a str,
        }

        self.patch_with_params(&[EXITS, id, "status"], &Params { status }).await
    }

    pub async fn delete_exit(&self, id: &str) -> Result<(), Error> {
        self.delete(&[EXITS, id]).await
    }
}
