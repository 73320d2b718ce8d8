use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::fs;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::dashboard::adapters::outbound::backend_api_in_memory::InMemoryBackend;
use crate::modules::dashboard::core::records::{EventRecord, QuoteRecord};
use crate::shell::http::router;
use crate::shell::state::AppState;

fn seeded_backend() -> InMemoryBackend {
    let events: Vec<EventRecord> = serde_json::from_str(
        &fs::read_to_string("./src/tests/fixtures/json/events.json").unwrap(),
    )
    .unwrap();
    let quotes: Vec<QuoteRecord> = serde_json::from_str(
        &fs::read_to_string("./src/tests/fixtures/json/quote_requests.json").unwrap(),
    )
    .unwrap();
    InMemoryBackend::with_records(events, quotes)
}

fn app(backend: InMemoryBackend) -> Router {
    router(AppState::new(Arc::new(backend)))
}

fn request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", "Bearer manager-token")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn loads_the_reconciled_dashboard() {
    let app = app(seeded_backend());

    let (status, view) = json_body(&app, request("GET", "/dashboard", "")).await;

    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = view["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["event:1", "event:2", "event:3", "quote:5", "quote:11"]);

    let launch = &view["rows"][1];
    assert_eq!(launch["quoteId"], 9);
    assert_eq!(launch["participantCount"], 140);
    assert_eq!(launch["status"]["code"], "QUOTE_PENDING");
    assert_eq!(launch["status"]["cssClass"], "status-pending");

    let offsite = &view["rows"][2];
    assert_eq!(offsite["location"], "—");
    assert_eq!(offsite["status"]["cssClass"], "status-completed");

    let board_dinner = &view["rows"][4];
    assert_eq!(board_dinner["name"], "Board Dinner");
    assert_eq!(board_dinner["eventId"], Value::Null);
    assert_eq!(board_dinner["status"]["code"], "DRAFT");
    assert_eq!(board_dinner["status"]["cssClass"], "status-draft");

    assert_eq!(
        view["summary"],
        json!({ "total": 5, "pending": 2, "approved": 1, "completed": 1 })
    );
}

#[tokio::test]
async fn approving_a_quote_moves_its_row_to_approved() {
    let app = app(seeded_backend());

    let (status, _) = json_body(
        &app,
        request(
            "PUT",
            "/quotes/9/approve",
            r#"{"finalPrice":19000,"requestedWorkers":8,"adminNotes":"  "}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, view) = json_body(&app, request("GET", "/dashboard?filter=approved", "")).await;
    let keys: Vec<&str> = view["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["event:1", "event:2"]);
    assert_eq!(view["rows"][1]["price"], 19000.0);
    assert_eq!(view["summary"]["pending"], 1);
}

#[tokio::test]
async fn deleting_an_event_leaves_its_quote_visible() {
    let app = app(seeded_backend());

    let (status, _) = json_body(&app, request("DELETE", "/events/2", "")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, view) = json_body(&app, request("GET", "/dashboard?search=launch", "")).await;
    assert_eq!(view["rows"].as_array().unwrap().len(), 1);
    assert_eq!(view["rows"][0]["key"], "event:2");
    assert_eq!(view["rows"][0]["eventStatus"], Value::Null);
    assert_eq!(view["rows"][0]["quoteId"], 9);
}

#[tokio::test]
async fn reports_a_degraded_source_instead_of_failing() {
    let mut backend = seeded_backend();
    backend.toggle_quotes_offline();
    let app = app(backend);

    let (status, view) = json_body(&app, request("GET", "/dashboard", "")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["rows"].as_array().unwrap().len(), 3);
    assert_eq!(view["degradedSources"], json!(["quoteRequests"]));
}

#[tokio::test]
async fn answers_401_once_the_session_expired() {
    let mut backend = seeded_backend();
    backend.expire_session();
    let app = app(backend);

    let (status, body) = json_body(&app, request("GET", "/dashboard", "")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "session_expired");
}

#[tokio::test]
async fn serves_the_dashboard_over_graphql() {
    let app = app(seeded_backend());
    let query = json!({
        "query": "{ dashboard(filter: PENDING, search: \"workshop\") { rows { key name price } summary { total } } }"
    });

    let (status, body) = json_body(&app, request("POST", "/gql", &query.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["errors"], Value::Null);
    assert_eq!(body["data"]["dashboard"]["rows"][0]["key"], "quote:5");
    assert_eq!(body["data"]["dashboard"]["rows"][0]["name"], "Winter Workshop");
    assert_eq!(body["data"]["dashboard"]["summary"]["total"], 5);
}

#[tokio::test]
async fn answers_health_checks() {
    let app = app(InMemoryBackend::new());
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
