#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use kanban_api::config::ServerConfig;
use kanban_api::router::build_app_router;
use kanban_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
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

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Fixture builders (go through the API so the full stack is exercised)
// ---------------------------------------------------------------------------

pub async fn create_board(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let json = body_json(post_json(app, "/api/v1/boards", json!({ "name": name })).await).await;
    json["id"].as_i64().expect("board id")
}

pub async fn create_card(pool: &PgPool, board_id: i64, title: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let uri = format!("/api/v1/boards/{board_id}/cards");
    let json = body_json(post_json(app, &uri, json!({ "title": title })).await).await;
    json["id"].as_i64().expect("card id")
}

/// A complete, valid task payload for `card_id` ending on `end_date`.
pub fn task_payload(card_id: i64, end_date: &str) -> Value {
    json!({
        "card_id": card_id,
        "taskName": "Write report",
        "description": "Draft the first version",
        "startDate": "2025-10-01",
        "endDate": end_date,
        "allocator": "Jane Doe",
        "employee": "John Smith",
        "priority": "Alta",
        "progress": 0
    })
}

pub async fn create_task(pool: &PgPool, card_id: i64, end_date: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let json = body_json(post_json(app, "/api/v1/tasks", task_payload(card_id, end_date)).await).await;
    json["id"].as_i64().expect("task id")
}

/// Today's date shifted by `offset_days`, formatted as `YYYY-MM-DD`.
pub fn date_from_today(offset_days: i64) -> String {
    let today = kanban_core::deadline::today();
    (today + chrono::Duration::days(offset_days))
        .format("%Y-%m-%d")
        .to_string()
}
