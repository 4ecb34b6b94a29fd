//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use kanban_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the board store answers, `unavailable` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub checked_at: Timestamp,
}

impl HealthResponse {
    fn for_database(db_healthy: bool) -> (StatusCode, Self) {
        let (code, status) = if db_healthy {
            (StatusCode::OK, "ok")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        };
        let body = Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            checked_at: chrono::Utc::now(),
        };
        (code, body)
    }
}

/// GET /health
///
/// 200 while the database answers a ping, 503 otherwise, so a load
/// balancer can drop the instance without parsing the body.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = match kanban_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };
    let (code, body) = HealthResponse::for_database(db_healthy);
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
