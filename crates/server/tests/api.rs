//! Router-level tests for the HTTP API
//!
//! These drive the full middleware stack with `tower::ServiceExt::oneshot`
//! against an in-memory catalog; no socket is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use catalog::{CatalogStore, DuplicatePolicy, MedicineRecord};
use http_body_util::BodyExt;
use matcher::Matcher;
use medassist::MedicineService;
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

fn test_records() -> Vec<MedicineRecord> {
    vec![
        MedicineRecord::new(
            "Paracetamol",
            "Relieves mild pain and reduces fever.",
            "Do not exceed 4 g per day.",
            "Rarely, skin rash.",
            "Consult a doctor if fever lasts more than 3 days.",
        ),
        MedicineRecord::new(
            "Amoxicillin",
            "Treats bacterial infections.",
            "Complete the full course.",
            "Nausea, diarrhoea.",
            "Prescription only.",
        ),
    ]
}

fn ready_app() -> Router {
    let store = CatalogStore::from_records(test_records(), DuplicatePolicy::LastWins)
        .expect("valid catalog");
    let service = MedicineService::new(store, Matcher::default());
    build_router(Arc::new(ServerState::with_service(
        ServerConfig::default(),
        service,
    )))
}

fn unavailable_app() -> Router {
    let service = MedicineService::unavailable("catalog file missing", Matcher::default());
    build_router(Arc::new(ServerState::with_service(
        ServerConfig::default(),
        service,
    )))
}

fn lookup_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/medicine-info")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn exact_lookup_returns_record() {
    let response = ready_app()
        .oneshot(lookup_request(json!({ "medicine_name": "paracetamol" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["medicine"], "Paracetamol");
    assert_eq!(body["usage"], "Relieves mild pain and reduces fever.");
    assert_eq!(body["dos_donts"], "Do not exceed 4 g per day.");
    assert_eq!(body["side_effects"], "Rarely, skin rash.");
    assert_eq!(
        body["disclaimer"],
        "Consult a doctor if fever lasts more than 3 days."
    );
}

#[tokio::test]
async fn misspelled_lookup_uses_catalog_name() {
    let response = ready_app()
        .oneshot(lookup_request(
            json!({ "medicine_name": "amoxicilin", "language": "Hindi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["medicine"], "Amoxicillin");
    assert_eq!(body["usage"], "Treats bacterial infections.");
}

#[tokio::test]
async fn camel_case_field_is_accepted() {
    let response = ready_app()
        .oneshot(lookup_request(json!({ "medicineName": "PARACETAMOL " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["medicine"], "Paracetamol");
}

#[tokio::test]
async fn unknown_medicine_is_ok_with_apology() {
    let response = ready_app()
        .oneshot(lookup_request(json!({ "medicine_name": "xyzzy" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["medicine"], "xyzzy");
    assert_eq!(body["usage"], "Medicine not found in our database.");
    assert_eq!(body["dos_donts"], "We are constantly adding new medicines.");
    assert_eq!(body["side_effects"], "Data unavailable.");
    assert_eq!(
        body["disclaimer"],
        "Please consult a doctor or check the spelling."
    );
}

#[tokio::test]
async fn body_without_medicine_name_is_bad_request() {
    let response = ready_app()
        .oneshot(lookup_request(json!({ "language": "English" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("medicine_name"));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/medicine-info")
        .header("content-type", "application/json")
        .body(Body::from("{\"medicine_name\": "))
        .unwrap();
    let response = ready_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");

    let untyped = Request::builder()
        .method("POST")
        .uri("/api/medicine-info")
        .body(Body::from(json!({ "medicine_name": "Paracetamol" }).to_string()))
        .unwrap();
    let response = ready_app().oneshot(untyped).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn padded_query_within_cap_matches_exactly() {
    let name = format!("{}paracetamol", " ".repeat(300));
    let response = ready_app()
        .oneshot(lookup_request(json!({ "medicine_name": name })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["medicine"], "Paracetamol");
    assert_eq!(body["usage"], "Relieves mild pain and reduces fever.");
}

#[tokio::test]
async fn missing_catalog_is_a_client_facing_error() {
    let response = unavailable_app()
        .oneshot(lookup_request(json!({ "medicine_name": "Paracetamol" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CATALOG_UNAVAILABLE");
    let details = &body["error"]["details"];
    assert_eq!(details["medicine"], "Paracetamol");
    assert_eq!(
        details["usage"],
        "Database Error: medicine catalog not loaded."
    );
    assert_eq!(details["dos_donts"], "Please check backend setup.");
    assert_eq!(details["side_effects"], "Unknown");
    assert_eq!(details["disclaimer"], "System Error.");
}

#[tokio::test]
async fn readiness_follows_catalog_state() {
    let ready = ready_app()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(ready.status(), StatusCode::OK);
    let body = body_json(ready).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["components"]["catalog"]["records"], 2);

    let not_ready = unavailable_app()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(not_ready.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(not_ready).await["error"]["code"], "NOT_READY");
}

#[tokio::test]
async fn health_and_root_are_always_up() {
    let health = unavailable_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(body_json(health).await["status"], "healthy");

    let root = unavailable_app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(root.status(), StatusCode::OK);
    let body = body_json(root).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Medicine Assistant API is running");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = ready_app()
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn request_id_is_echoed() {
    let request = Request::get("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = ready_app().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");

    let generated = ready_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(generated.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn metrics_falls_back_to_json_without_exporter() {
    let response = ready_app()
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn state_from_config_loads_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("medicines.json");
    std::fs::write(
        &path,
        json!([{
            "name": "Ibuprofen",
            "usage": "Pain and inflammation.",
            "dos_donts": "Take with food.",
            "side_effects": "Stomach upset.",
            "disclaimer": "Avoid in late pregnancy."
        }])
        .to_string(),
    )
    .unwrap();

    let mut config = ServerConfig::default();
    config.catalog.path = path;
    config.require_catalog = true;
    let state = ServerState::new(config).expect("catalog loads");
    assert!(state.service.status().ready);

    let response = build_router(Arc::new(state))
        .oneshot(lookup_request(json!({ "medicine_name": "ibuprofin" })))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["medicine"], "Ibuprofen");
}

#[tokio::test]
async fn required_catalog_failure_refuses_to_start() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ServerConfig::default();
    config.catalog.path = dir.path().join("absent.json");

    config.require_catalog = true;
    assert!(ServerState::new(config.clone()).is_err());

    config.require_catalog = false;
    let state = ServerState::new(config).expect("starts degraded");
    assert!(!state.service.status().ready);
}

#[tokio::test]
async fn required_catalog_must_have_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("medicines.json");
    std::fs::write(&path, "[]").unwrap();

    let mut config = ServerConfig::default();
    config.catalog.path = path;
    config.require_catalog = true;

    let err = ServerState::new(config.clone())
        .err()
        .expect("empty catalog refuses to start");
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("no records"));

    config.require_catalog = false;
    let state = ServerState::new(config).expect("starts degraded");
    assert!(!state.service.status().ready);
}
