// Event endpoints: `/events/`

use serde::Serialize;

use crate::client::BackendClient;
use crate::error::Error;
use crate::types::{EventPayload, EventQuery, EventResponse, MessageResponse};

const EVENTS: &str = "events";

impl BackendClient {
    /// `GET /events/?status=&organizer_id=`
    pub async fn list_events(&self, query: &EventQuery) -> Result<Vec<EventResponse>, Error> {
        self.get_with_params(&[EVENTS, ""], query).await
    }

    /// `GET /events/{id}`
    pub async fn get_event(&self, id: &str) -> Result<EventResponse, Error> {
        self.get(&[EVENTS, id]).await
    }

    /// `POST /events/` -- the backend assigns the id and starts it as `upcoming`.
    pub async fn create_event(&self, body: &EventPayload) -> Result<EventResponse, Error> {
        self.post(&[EVENTS, ""], body).await
    }

    /// `PUT /events/{id}`
    pub async fn update_event(
        &self,
        id: &str,
        body: &EventPayload,
    ) -> Result<EventResponse, Error> {
        self.put(&[EVENTS, id], body).await
    }

    /// `PATCH /events/{id}/status?status=`
    pub async fn set_event_status(&self, id: &str, status: &str) -> Result<MessageResponse, Error> {
        #[derive(Serialize)]
        struct Params<'a> {
            status: &'a str,
        }

        self.patch_with_params(&[EVENTS, id, "status"], &Params { status }).await
    }

    /// `DELETE /events/{id}` -- answers with a confirmation message.
    pub async fn delete_event(&self, id: &str) -> Result<MessageResponse, Error> {
        self.delete_with_response(&[EVENTS, id]).await
    }
}
