// Feedback endpoints: `/feedback/`

use serde::Serialize;

use crate::client::BackendClient;
use crate::error::Error;
use crate::types::{FeedbackPayload, FeedbackQuery, FeedbackResponse, FeedbackStatsResponse};

const FEEDBACK: &str = "feedback";

impl BackendClient {
    /// `GET /feedback/?event_id=&user_id=&min_rating=&sentiment=`
    pub async fn list_feedback(
        &self,
        query: &FeedbackQuery,
    ) -> Result<Vec<FeedbackResponse>, Error> {
        self.get_with_params(&[FEEDBACK, ""], query).await
    }

    pub async fn get_feedback(&self, id: &str) -> Result<FeedbackResponse, Error> {
        self.get(&[FEEDBACK, id]).await
    }

    /// `POST /feedback/` -- the backend fills `ai_sentiment` from the comment.
    pub async fn create_feedback(&self, body: &FeedbackPayload) -> Result<FeedbackResponse, Error> {
        self.post(&[FEEDBACK, ""], body).await
    }

    /// `GET /feedback/event/{event_id}/stats`
    pub async fn feedback_stats(&self, event_id: &str) -> Result<FeedbackStatsResponse, Error> {
        self.get(&[FEEDBACK, "event", event_id, "stats"]).await
    }

    /// `GET /feedback/event/{event_id}/recent?limit=` (newest first)
    pub async fn recent_feedback(
        &self,
        event_id: &str,
        limit: u32,
    ) -> Result<Vec<FeedbackResponse>, Error> {
        #[derive(Serialize)]
        struct Params {
            limit: u32,
        }

        self.get_with_params(&[FEEDBACK, "event", event_id, "recent"], &Params { limit }).await
    }
}
