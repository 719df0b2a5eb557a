// Washroom endpoints: `/washroom-facilities/`

use serde::Serialize;

use crate::client::BackendClient;
use crate::error::Error;
use crate::types::{EventScope, WashroomPayload, WashroomResponse};

const WASHROOMS: &str = "washroom-facilities";

impl BackendClient {
    pub async fn list_washrooms(&self, scope: &EventScope) -> Result<Vec<WashroomResponse>, Error> {
        self.get_with_params(&[WASHROOMS, ""], scope).await
    }

    pub async fn get_washroom(&self, id: &str) -> Result<WashroomResponse, Error> {
        self.get(&[WASHROOMS, id]).await
    }

    pub async fn create_washroom(&self, body: &WashroomPayload) -> Result<WashroomResponse, Error> {
        self.post(&[WASHROOMS, ""], body).await
    }

    pub async fn update_washroom(
        &self,
        id: &str,
        body: &WashroomPayload,
    ) -> Result<WashroomResponse, Error> {
        self.put(&[WASHROOMS, id], body).await
    }

    /// `PATCH /washroom-facilities/{id}/status?status=` (available | occupied | maintenance)
    pub async fn set_washroom_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<WashroomResponse, Error> {
        #[derive(Serialize)]
        struct Params<'a> {
            status: &'a str,
        }

        self.patch_with_params(&[WASHROOMS, id, "status"], &Params { status }).await
    }

    pub async fn delete_washroom(&self, id: &str) -> Result<(), Error> {
        self.delete(&[WASHROOMS, id]).await
    }
}
