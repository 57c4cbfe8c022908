#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gymdesk_api::config::ServerConfig;
use gymdesk_api::router::build_app_router;
use gymdesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through the same `build_app_router` as `main.rs`, so integration
/// tests exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures (created through the API)
// ---------------------------------------------------------------------------

/// Create a member with the given lesson credit and return its id.
pub async fn create_member(pool: &PgPool, email: &str, lesson: i32) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/members",
        serde_json::json!({
            "first_name": "Lin",
            "last_name": "Park",
            "email": email,
            "phone_number": "555-0100",
            "lesson": lesson,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "member fixture should be created");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a trainer with the given fixed per-lesson rate and return its id.
pub async fn create_trainer(pool: &PgPool, email: &str, fixed_salary: i32) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/trainers",
        serde_json::json!({
            "first_name": "Mo",
            "last_name": "Reyes",
            "email": email,
            "phone_number": "555-0200",
            "fixed_salary": fixed_salary,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "trainer fixture should be created");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a class taught by `trainer_id` and return its id.
pub async fn create_class(
    pool: &PgPool,
    trainer_id: i64,
    max_participants: i32,
    price: i32,
) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/classes",
        serde_json::json!({
            "trainer_id": trainer_id,
            "class_name": "Spin",
            "class_date": "2025-03-01T18:00:00Z",
            "duration": 45,
            "max_participants": max_participants,
            "price": price,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "class fixture should be created");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a membership plan granting `lesson` credits and return its id.
pub async fn create_plan(pool: &PgPool, lesson: i32) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/membership-plans",
        serde_json::json!({
            "plan_name": "Monthly",
            "price": 49.5,
            "duration": 30,
            "lesson": lesson,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "plan fixture should be created");
    body_json(response).await["id"].as_i64().unwrap()
}
