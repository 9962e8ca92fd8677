#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use coachcal::clients::ClientDirectory;
use coachcal::db::repositories::LocalRepository;
use coachcal::db::repository::FullRepository;
use coachcal::http::{create_router, AppState};
use coachcal::scheduler::SLOT_COUNT;

use support::single_booking;

fn test_app(repo: LocalRepository) -> Router {
    let repo = Arc::new(repo) as Arc<dyn FullRepository>;
    let state = AppState::new(repo, Arc::new(ClientDirectory::sample()));
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("valid request")
}

fn booking_payload(client_id: &str, date: &str, time: &str, call_type: &str) -> Value {
    json!({
        "clientId": client_id,
        "date": date,
        "time": time,
        "callType": call_type,
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app(LocalRepository::new());
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_get_day_schedule() {
    let repo = LocalRepository::with_bookings(vec![single_booking("1", "2024-03-06", "10:30")]);
    let app = test_app(repo);

    let response = app.oneshot(get("/v1/schedule/2024-03-06")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["dayName"], "Wednesday");
    assert_eq!(body["formattedDate"], "March 6, 2024");
    assert_eq!(body["booked"], 1);
    assert_eq!(body["timeSlots"].as_array().unwrap().len(), SLOT_COUNT);
    assert_eq!(body["timeSlots"][0]["isBooked"], true);
}

#[tokio::test]
async fn test_malformed_date_is_bad_request() {
    let app = test_app(LocalRepository::new());
    let response = app.oneshot(get("/v1/schedule/not-a-date")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_booking_then_conflict() {
    let app = test_app(LocalRepository::new());
    let payload = booking_payload("1", "2024-03-04", "10:30", "onboarding");

    let created = app
        .clone()
        .oneshot(post_json("/v1/bookings", &payload))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let body = body_json(created).await;
    assert_eq!(body["clientName"], "Sarah Johnson");
    assert!(body["id"].is_string());

    // Same client, same triple: refused with a descriptive conflict.
    let repeat = app
        .oneshot(post_json("/v1/bookings", &payload))
        .await
        .unwrap();
    assert_eq!(repeat.status(), StatusCode::CONFLICT);

    let conflict = body_json(repeat).await;
    assert_eq!(conflict["code"], "CONFLICT");
}

#[tokio::test]
async fn test_create_booking_off_grid_time() {
    let app = test_app(LocalRepository::new());
    let payload = booking_payload("1", "2024-03-04", "10:45", "onboarding");

    let response = app
        .oneshot(post_json("/v1/bookings", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_booking_roundtrip() {
    let app = test_app(LocalRepository::new());

    let created = app
        .clone()
        .oneshot(post_json(
            "/v1/bookings",
            &booking_payload("1", "2024-03-04", "10:30", "onboarding"),
        ))
        .await
        .unwrap();
    let id = body_json(created).await["id"].as_str().unwrap().to_string();

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/v1/bookings/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let missing = app
        .oneshot(get(&format!("/v1/bookings/{}", id)))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_client_search() {
    let app = test_app(LocalRepository::new());
    let response = app.oneshot(get("/v1/clients?q=sarah")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["clients"][0]["name"], "Sarah Johnson");
}

#[tokio::test]
async fn test_integrity_report_endpoint() {
    let repo = LocalRepository::with_bookings(vec![
        single_booking("1", "2024-03-04", "10:30"),
        single_booking("1", "2024-03-04", "10:30"),
    ]);
    let app = test_app(repo);

    let response = app.oneshot(get("/v1/reports/integrity")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["duplicateCount"], 2);
    assert_eq!(body["stats"]["total"], 2);
    assert_eq!(body["clientStats"]["total"], 25);
}
