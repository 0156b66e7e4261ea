//! End-to-end tests driving the router against a fresh SQLite file per test

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crm_server::{build_router, create_pool, init_schema};

/// Keeps the temp directory alive for as long as the router is used.
struct TestApp {
    router: Router,
    _dir: TempDir,
}

async fn seeded_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("agency.db").display());

    let pool = create_pool(&url).await.unwrap();
    init_schema(&pool).await.unwrap();

    TestApp {
        router: build_router(pool, false),
        _dir: dir,
    }
}

async fn send(app: &TestApp, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn root_reports_operational() {
    let app = seeded_app().await;

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "CRM Service is operational."}));
}

#[tokio::test]
async fn seeded_store_lists_three_customers() {
    let app = seeded_app().await;

    let (status, body) = send(&app, "GET", "/customers/", None).await;
    assert_eq!(status, StatusCode::OK);

    let emails: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["email"].as_str().unwrap())
        .collect();
    assert_eq!(
        emails,
        vec![
            "20hozaifa02@gmail.com",
            "fariha.fhf@gmail.com",
            "hozaifah626@gmail.com"
        ]
    );
}

#[tokio::test]
async fn status_filter_returns_exact_matches_only() {
    let app = seeded_app().await;

    let (status, body) = send(&app, "GET", "/customers/?status=lead", None).await;
    assert_eq!(status, StatusCode::OK);

    let customers = body.as_array().unwrap();
    assert_eq!(customers.len(), 2);
    assert!(customers.iter().all(|c| c["status"] == "lead"));

    let (_, body) = send(&app, "GET", "/customers?status=churned", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn malformed_query_gets_json_error() {
    let app = seeded_app().await;

    let (status, body) = send(&app, "GET", "/customers/?status=lead&status=active", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
    assert!(body["message"].as_str().unwrap().contains("status"));
}

#[tokio::test]
async fn created_customer_round_trips_through_get() {
    let app = seeded_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/customers/",
        Some(json!({"name": "Nadia", "email": "nadia@example.com", "status": "lead"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);

    let (status, fetched) = send(&app, "GET", "/customers/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_email_on_create_is_rejected() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/customers/",
        Some(json!({"name": "Copy", "email": "fariha.fhf@gmail.com", "status": "lead"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists.");

    let (_, body) = send(&app, "GET", "/customers/", None).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_rejects_missing_and_empty_fields() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/customers/",
        Some(json!({"name": "Nadia", "email": "nadia@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");

    let (status, body) = send(
        &app,
        "POST",
        "/customers/",
        Some(json!({"name": "", "email": "nadia@example.com", "status": "lead"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn missing_customer_is_404() {
    let app = seeded_app().await;

    let (status, body) = send(&app, "GET", "/customers/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Customer not found");
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let app = seeded_app().await;

    let (status, body) = send(&app, "GET", "/customers/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn status_only_update_keeps_other_fields() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/customers/1",
        Some(json!({"status": "active"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Hozaifa", "email": "20hozaifa02@gmail.com", "status": "active"})
    );

    let (_, fetched) = send(&app, "GET", "/customers/1", None).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn empty_update_changes_nothing() {
    let app = seeded_app().await;

    let (_, before) = send(&app, "GET", "/customers/2", None).await;
    let (status, after) = send(&app, "PUT", "/customers/2", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after, before);
}

#[tokio::test]
async fn update_missing_customer_is_404() {
    let app = seeded_app().await;

    let (status, _) = send(&app, "PUT", "/customers/42", Some(json!({"name": "Ghost"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/customers/", None).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn update_to_taken_email_is_rejected() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/customers/1",
        Some(json!({"email": "fariha.fhf@gmail.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists.");

    let (_, fetched) = send(&app, "GET", "/customers/1", None).await;
    assert_eq!(fetched["email"], "20hozaifa02@gmail.com");
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = seeded_app().await;

    let (status, body) = send(&app, "DELETE", "/customers/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", "/customers/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/customers/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn emptied_store_is_reseeded_on_next_start() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("agency.db").display());

    let pool = create_pool(&url).await.unwrap();
    assert_eq!(init_schema(&pool).await.unwrap(), 3);
    sqlx::query("DELETE FROM customers")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    // An emptied table counts as first run again.
    let pool = create_pool(&url).await.unwrap();
    assert_eq!(init_schema(&pool).await.unwrap(), 3);
    assert_eq!(init_schema(&pool).await.unwrap(), 0);
}
