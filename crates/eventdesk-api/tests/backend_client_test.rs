#![allow(clippy::unwrap_used)]
// Integration tests for `BackendClient` using wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{
    body_json, header_regex, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eventdesk_api::types::{
    AlertQuery, EmergencyStatusUpdate, EventScope, FeedbackPayload, InferenceContext,
    LostPersonQuery,
};
use eventdesk_api::{BackendClient, Error, RetryPolicy};

// ── Helpers ─────────────────────────────────────────────────────────

fn fast_retries(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
    }
}

async fn setup() -> (MockServer, BackendClient) {
    setup_with(fast_retries(2)).await
}

async fn setup_with(retry: RetryPolicy) -> (MockServer, BackendClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = BackendClient::with_client(reqwest::Client::new(), base_url, retry).unwrap();
    (server, client)
}

fn lost_person(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Asha",
        "age": 9,
        "gender": "female",
        "description": "Red jacket",
        "last_seen_location": "Gate 3",
        "last_seen_time": "2025-06-01T18:30:00",
        "photo_url": null,
        "reporter_id": "U1",
        "reporter_name": "Ravi",
        "reporter_phone": "555-0101",
        "event_id": "EVT1",
        "status": status,
        "priority": "critical",
        "reported_at": "2025-06-01T18:40:00"
    })
}

// ── List filters ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_lost_persons_sends_filters_as_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/lost-persons/"))
        .and(query_param("event_id", "EVT1"))
        .and(query_param("status", "searching"))
        .and(query_param_is_missing("priority"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([lost_person("LP1", "searching")])),
        )
        .mount(&server)
        .await;

    let query = LostPersonQuery {
        event_id: Some("EVT1".into()),
        status: Some("searching".into()),
        priority: None,
    };
    let reports = client.list_lost_persons(&query).await.unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].id, "LP1");
    assert_eq!(reports[0].status, "searching");
    assert_eq!(reports[0].priority.as_deref(), Some("critical"));
}

#[tokio::test]
async fn test_list_zones_scoped_to_event() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/zones/"))
        .and(query_param("event_id", "EVT1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "z1",
            "event_id": "EVT1",
            "name": "Main Stage",
            "capacity": 1000,
            "current_density": 750,
            "density_status": "moderate",
            "image_url": null,
            "last_updated": "2025-06-01T18:00:00",
            "created_at": "2025-06-01T10:00:00"
        }])))
        .mount(&server)
        .await;

    let zones = client.list_zones(&EventScope::event("EVT1")).await.unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].current_density, 750);
    assert_eq!(zones[0].density_status.as_deref(), Some("moderate"));
}

// ── Status PATCHes ──────────────────────────────────────────────────

#[tokio::test]
async fn test_lost_person_status_goes_in_query_string() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/lost-persons/LP1/status"))
        .and(query_param("new_status", "found"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lost_person("LP1", "found")))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client.set_lost_person_status("LP1", "found").await.unwrap();
    assert_eq!(updated.status, "found");
}

#[tokio::test]
async fn test_event_status_returns_acknowledgement() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/events/EVT1/status"))
        .and(query_param("status", "live"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Event status updated",
            "event_id": "EVT1",
            "status": "live"
        })))
        .mount(&server)
        .await;

    let ack = client.set_event_status("EVT1", "live").await.unwrap();
    assert_eq!(ack.status.as_deref(), Some("live"));
    assert_eq!(ack.event_id.as_deref(), Some("EVT1"));
}

#[tokio::test]
async fn test_zone_density_omits_status_when_not_given() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/zones/z1/density"))
        .and(query_param("current_density", "420"))
        .and(query_param_is_missing("density_status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "z1",
            "event_id": "EVT1",
            "name": "Food Court",
            "capacity": 500,
            "current_density": 420,
            "density_status": "crowded"
        })))
        .mount(&server)
        .await;

    let zone = client.update_zone_density("z1", 420, None).await.unwrap();
    assert_eq!(zone.density_status.as_deref(), Some("crowded"));
}

#[tokio::test]
async fn test_emergency_status_carries_responder_fields() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/medical-emergencies/ME1/status"))
        .and(query_param("new_status", "on_scene"))
        .and(query_param("responder_name", "Team B"))
        .and(query_param("response_time", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ME1",
            "event_id": "EVT1",
            "emergency_type": "heatstroke",
            "severity": "severe",
            "location": "North lawn",
            "status": "on_scene",
            "responder_name": "Team B",
            "response_time": 6
        })))
        .mount(&server)
        .await;

    let update = EmergencyStatusUpdate {
        new_status: "on_scene".into(),
        responder_name: Some("Team B".into()),
        response_time: Some(6),
    };
    let emergency = client
        .set_medical_emergency_status("ME1", &update)
        .await
        .unwrap();
    assert_eq!(emergency.response_time, Some(6));
}

// ── Creates & deletes ───────────────────────────────────────────────

#[tokio::test]
async fn test_create_feedback_posts_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/feedback/"))
        .and(body_json(json!({
            "event_id": "EVT1",
            "user_id": "U9",
            "rating": 5,
            "comments": "Great sound"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "FB1",
            "event_id": "EVT1",
            "user_id": "U9",
            "rating": 5,
            "comments": "Great sound",
            "ai_sentiment": "positive",
            "submitted_at": "2025-06-01T21:00:00"
        })))
        .mount(&server)
        .await;

    let body = FeedbackPayload {
        event_id: "EVT1".into(),
        user_id: "U9".into(),
        rating: 5,
        comments: Some("Great sound".into()),
        category: None,
    };
    let created = client.create_feedback(&body).await.unwrap();
    assert_eq!(created.ai_sentiment.as_deref(), Some("positive"));
}

#[tokio::test]
async fn test_feedback_accepts_singular_comment_field() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/feedback/FB2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "FB2",
            "event_id": "EVT1",
            "rating": 2,
            "comment": "Long queues",
            "created_at": "2025-06-01T21:00:00"
        })))
        .mount(&server)
        .await;

    let fb = client.get_feedback("FB2").await.unwrap();
    assert_eq!(fb.comments.as_deref(), Some("Long queues"));
    assert_eq!(fb.submitted_at.as_deref(), Some("2025-06-01T21:00:00"));
}

#[tokio::test]
async fn test_delete_zone_accepts_no_content() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/zones/z1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_zone("z1").await.unwrap();
}

// ── Alerts ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_alerts_sends_active_flag() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/alerts/"))
        .and(query_param("event_id", "EVT1"))
        .and(query_param("is_active", "true"))
        .and(query_param_is_missing("severity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "ALTA1B2C3D4E5F6",
            "event_id": "EVT1",
            "title": "Info Alert",
            "message": "Performance starting soon",
            "alert_type": "info",
            "severity": "low",
            "is_active": true,
            "created_at": "2025-06-01T19:00:00"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let query = AlertQuery {
        event_id: Some("EVT1".into()),
        is_active: Some(true),
        ..AlertQuery::default()
    };
    let alerts = client.list_alerts(&query).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, "info");
}

#[tokio::test]
async fn test_deactivate_alert_is_a_bodyless_patch() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/alerts/ALT1/deactivate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Alert deactivated",
            "alert_id": "ALT1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ack = client.deactivate_alert("ALT1").await.unwrap();
    assert_eq!(ack.alert_id.as_deref(), Some("ALT1"));
}

#[tokio::test]
async fn test_missing_weather_reading_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/alerts/weather/event/EVT9/latest"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "No weather alerts found for this event"
        })))
        .mount(&server)
        .await;

    let result = client.latest_weather_alert("EVT9").await;
    assert!(
        matches!(result, Err(Error::NotFound { ref message, .. }) if message.contains("weather")),
        "got {result:?}"
    );
}

// ── Multipart ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_photo_upload_is_multipart() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/lost-persons/LP1/photo"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Photo uploaded successfully",
            "photo_url": "/uploads/lost_persons/LP1.jpg",
            "filename": "LP1.jpg"
        })))
        .mount(&server)
        .await;

    let resp = client
        .upload_lost_person_photo("LP1", "asha.jpg", vec![0xFF, 0xD8, 0xFF])
        .await
        .unwrap();
    assert_eq!(resp.photo_url, "/uploads/lost_persons/LP1.jpg");
}

#[tokio::test]
async fn test_inference_count_reads_person_count() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/inference/count"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image_filename": "gate.jpg",
            "person_count": 137,
            "model": "opaque"
        })))
        .mount(&server)
        .await;

    let context = InferenceContext {
        event_id: Some("EVT1".into()),
        area_name: Some("Gate 3".into()),
        radius_m: Some(10.0),
        save_record: true,
    };
    let count = client
        .count_people("gate.jpg", vec![1, 2, 3], &context)
        .await
        .unwrap();
    assert_eq!(count.person_count, 137);
}

// ── Errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_not_found_maps_detail_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Event not found" })),
        )
        .mount(&server)
        .await;

    let result = client.get_event("missing").await;
    match result {
        Err(Error::NotFound { message, path }) => {
            assert_eq!(message, "Event not found");
            assert_eq!(path, "/events/missing");
        }
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_request_is_api_error_and_not_retried() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/emergency-exits/x1/status"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Invalid status. Must be 'crowded', 'moderate', or 'clear'"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.set_exit_status("x1", "blocked").await;
    assert!(
        matches!(result, Err(Error::Api { status: 400, ref message }) if message.contains("Invalid status")),
        "expected Api error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/washroom-facilities/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.list_washrooms(&EventScope::default()).await;
    assert!(
        matches!(result, Err(Error::Deserialization { ref body, .. }) if body.contains("oops")),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Retry ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_retries_server_errors_then_succeeds() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/events/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let events = client.list_events(&Default::default()).await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_get_gives_up_after_retry_budget() {
    let (server, client) = setup_with(fast_retries(1)).await;

    Mock::given(method("GET"))
        .and(path("/feedback/event/EVT1/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "db down" })))
        .expect(2)
        .mount(&server)
        .await;

    let result = client.feedback_stats("EVT1").await;
    assert!(
        matches!(result, Err(Error::Api { status: 500, .. })),
        "expected Api 500, got: {result:?}"
    );
    assert!(result.unwrap_err().is_transient());
}

#[tokio::test]
async fn test_post_is_never_retried() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/feedback/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let body = FeedbackPayload {
        event_id: "EVT1".into(),
        user_id: "U1".into(),
        rating: 3,
        ..Default::default()
    };
    let result = client.create_feedback(&body).await;
    assert!(matches!(result, Err(Error::Api { status: 503, .. })));
}

#[tokio::test]
async fn test_rate_limit_after_retries() {
    let (server, client) = setup_with(fast_retries(1)).await;

    Mock::given(method("GET"))
        .and(path("/zones/"))
        .respond_with(ResponseTemplate::new(429))
        .expect(2)
        .mount(&server)
        .await;

    let result = client.list_zones(&EventScope::default()).await;
    assert!(matches!(result, Err(Error::RateLimited)));
}
