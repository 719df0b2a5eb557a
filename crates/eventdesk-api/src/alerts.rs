// Alert endpoints: `/alerts/` and the weather readings under `/alerts/weather`.
//
// The backend answers `GET /alerts/weather` through `GET /alerts/{id}`, so
// weather readings are only reachable by id or as the latest for an event.

use crate::client::BackendClient;
use crate::error::Error;
use crate::types::{
    AlertPayload, AlertQuery, AlertResponse, MessageResponse, WeatherAlertPayload,
    WeatherAlertResponse,
};

const ALERTS: &str = "alerts";
const WEATHER: &str = "weather";

impl BackendClient {
    /// `GET /alerts/?event_id=&alert_type=&severity=&is_active=` (newest first)
    pub async fn list_alerts(&self, query: &AlertQuery) -> Result<Vec<AlertResponse>, Error> {
        self.get_with_params(&[ALERTS, ""], query).await
    }

    pub async fn get_alert(&self, id: &str) -> Result<AlertResponse, Error> {
        self.get(&[ALERTS, id]).await
    }

    /// `POST /alerts/` -- new alerts start active.
    pub async fn create_alert(&self, body: &AlertPayload) -> Result<AlertResponse, Error> {
        self.post(&[ALERTS, ""], body).await
    }

    /// `PATCH /alerts/{id}/deactivate`
    pub async fn deactivate_alert(&self, id: &str) -> Result<MessageResponse, Error> {
        self.patch_with_params(&[ALERTS, id, "deactivate"], &[] as &[(&str, &str)]).await
    }

    pub async fn delete_alert(&self, id: &str) -> Result<MessageResponse, Error> {
        self.delete_with_response(&[ALERTS, id]).await
    }

    pub async fn create_weather_alert(
        &self,
        body: &WeatherAlertPayload,
    ) -> Result<WeatherAlertResponse, Error> {
        self.post(&[ALERTS, WEATHER], body).await
    }

    pub async fn get_weather_alert(&self, id: &str) -> Result<WeatherAlertResponse, Error> {
        self.get(&[ALERTS, WEATHER, id]).await
    }

    /// `GET /alerts/weather/event/{event_id}/latest`
    pub async fn latest_weather_alert(
        &self,
        event_id: &str,
    ) -> Result<WeatherAlertResponse, Error> {
        self.get(&[ALERTS, WEATHER, "event", event_id, "latest"]).await
    }
}
