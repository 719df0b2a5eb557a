// Lost-person endpoints: `/lost-persons/`

use serde::Serialize;

use crate::client::BackendClient;
use crate::error::Error;
use crate::types::{
    LostPersonPayload, LostPersonQuery, LostPersonResponse, LostPersonStatsResponse,
    MessageResponse, PhotoUploadResponse,
};

const LOST_PERSONS: &str = "lost-persons";

impl BackendClient {
    /// `GET /lost-persons/?event_id=&status=&priority=`
    pub async fn list_lost_persons(
        &self,
        query: &LostPersonQuery,
    ) -> Result<Vec<LostPersonResponse>, Error> {
        self.get_with_params(&[LOST_PERSONS, ""], query).await
    }

    pub async fn get_lost_person(&self, id: &str) -> Result<LostPersonResponse, Error> {
        self.get(&[LOST_PERSONS, id]).await
    }

    /// `POST /lost-persons/` -- priority is assigned server-side from the age.
    pub async fn create_lost_person(
        &self,
        body: &LostPersonPayload,
    ) -> Result<LostPersonResponse, Error> {
        self.post(&[LOST_PERSONS, ""], body).await
    }

    /// `PATCH /lost-persons/{id}/status?new_status=`
    pub async fn set_lost_person_status(
        &self,
        id: &str,
        new_status: &str,
    ) -> Result<LostPersonResponse, Error> {
        #[derive(Serialize)]
        struct Params<'a> {
            new_status: &'a str,
        }

        self.patch_with_params(&[LOST_PERSONS, id, "status"], &Params { new_status }).await
    }

    /// `GET /lost-persons/search/active?event_id=` -- reports still being searched for.
    pub async fn active_lost_persons(
        &self,
        event_id: &str,
    ) -> Result<Vec<LostPersonResponse>, Error> {
        self.get_with_params(&[LOST_PERSONS, "search", "active"], &[("event_id", event_id)]).await
    }

    /// `GET /lost-persons/stats/event/{event_id}`
    pub async fn lost_person_stats(
        &self,
        event_id: &str,
    ) -> Result<LostPersonStatsResponse, Error> {
        self.get(&[LOST_PERSONS, "stats", "event", event_id]).await
    }

    /// `POST /lost-persons/{id}/photo` as multipart field `file`.
    pub async fn upload_lost_person_photo(
        &self,
        id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<PhotoUploadResponse, Error> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_owned());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.post_multipart(&[LOST_PERSONS, id, "photo"], form).await
    }

    /// `DELETE /lost-persons/{id}/photo`
    pub async fn delete_lost_person_photo(&self, id: &str) -> Result<MessageResponse, Error> {
        self.delete_with_response(&[LOST_PERSONS, id, "photo"]).await
    }
}
