// Zone endpoints: `/zones/`

use serde::Serialize;

use crate::client::BackendClient;
use crate::error::Error;
use crate::types::{EventScope, ZonePayload, ZoneResponse};

const ZONES: &str = "zones";

impl BackendClient {
    /// `GET /zones/?event_id=`
    pub async fn list_zones(&self, scope: &EventScope) -> Result<Vec<ZoneResponse>, Error> {
        self.get_with_params(&[ZONES, ""], scope).await
    }

    pub async fn get_zone(&self, id: &str) -> Result<ZoneResponse, Error> {
        self.get(&[ZONES, id]).await
    }

    pub async fn create_zone(&self, body: &ZonePayload) -> Result<ZoneResponse, Error> {
        self.post(&[ZONES, ""], body).await
    }

    pub async fn update_zone(&self, id: &str, body: &ZonePayload) -> Result<ZoneResponse, Error> {
        self.put(&[ZONES, id], body).await
    }

    /// `PATCH /zones/{id}/density?current_density=N[&density_status=]`
    ///
    /// Without an explicit status the backend derives one from the new count.
    pub async fn update_zone_density(
        &self,
        id: &str,
        current_density: u32,
        density_status: Option<&str>,
    ) -> Result<ZoneResponse, Error> {
        #[derive(Serialize)]
        struct Params<'a> {
            current_density: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            density_status: Option<&'a str>,
        }

        self.patch_with_params(
            &[ZONES, id, "density"],
            &Params {
                current_density,
                density_status,
            },
        )
        .await
    }

    /// `DELETE /zones/{id}` (204)
    pub async fn delete_zone(&self, id: &str) -> Result<(), Error> {
        self.delete(&[ZONES, id]).await
    }
}
