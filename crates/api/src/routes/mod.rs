pub mod board;
pub mod card;
pub mod health;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /boards                                   list, create
/// /boards/{id}                              get, update (PUT/PATCH), delete
/// /boards/{id}/cards                        list, create
///
/// /cards/{id}                               get, update, delete
/// /cards/{id}/move                          re-parent (PATCH)
/// /cards/{id}/tasks                         list
///
/// /tasks                                    list, create
/// /tasks/{id}                               get, update, delete
/// /tasks/update-card-id/{id}                re-parent (PATCH)
/// /tasks/daysLeft/{id}                      days remaining (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/boards", board::router())
        .nest("/cards", card::router())
        .nest("/tasks", task::router())
}
