//! Route definitions for the `/tasks` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// PATCH  /update-card-id/{id}     -> move_task
/// GET    /daysLeft/{id}           -> days_left
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/update-card-id/{id}", patch(task::move_task))
        .route("/daysLeft/{id}", get(task::days_left))
}
