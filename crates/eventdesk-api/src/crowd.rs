// Crowd-density and inference endpoints.
//
// `/inference/count` is an opaque person-counting service; the only field
// consumed from its answer is `person_count`.

use tracing::debug;

use crate::client::BackendClient;
use crate::error::Error;
use crate::types::{
    CountResponse, CrowdDensityPayload, CrowdDensityQuery, CrowdDensityResponse,
    InferenceContext,
};

const CROWD_DENSITY: &str = "crowd-density";

impl BackendClient {
    /// `GET /crowd-density/?event_id=&area_name=&density_level=`
    pub async fn list_crowd_density(
        &self,
        query: &CrowdDensityQuery,
    ) -> Result<Vec<CrowdDensityResponse>, Error> {
        self.get_with_params(&[CROWD_DENSITY, ""], query).await
    }

    /// `POST /crowd-density/` -- area and density level are computed server-side.
    pub async fn record_crowd_density(
        &self,
        body: &CrowdDensityPayload,
    ) -> Result<CrowdDensityResponse, Error> {
        self.post(&[CROWD_DENSITY, ""], body).await
    }

    /// `GET /crowd-density/event/{event_id}/latest` -- newest reading per area.
    pub async fn latest_crowd_density(
        &self,
        event_id: &str,
    ) -> Result<Vec<CrowdDensityResponse>, Error> {
        self.get(&[CROWD_DENSITY, "event", event_id, "latest"]).await
    }

    /// `POST /inference/count` with the image as multipart field `file`.
    pub async fn count_people(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        context: &InferenceContext,
    ) -> Result<CountResponse, Error> {
        debug!(file_name, size = bytes.len(), "submitting image for person count");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_owned());
        let mut form = reqwest::multipart::Form::new().part("file", part);
        if let Some(ref event_id) = context.event_id {
            form = form.text("event_id", event_id.clone());
        }
        if let Some(ref area_name) = context.area_name {
            form = form.text("area_name", area_name.clone());
        }
        if let Some(radius_m) = context.radius_m {
            form = form.text("radius_m", radius_m.to_string());
        }
        if context.save_record {
            form = form.text("save_record", "true");
        }

        self.post_multipart(&["inference", "count"], form).await
    }
}
