//! Route definitions for the `/cards` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{card, task};
use crate::state::AppState;

/// Routes mounted at `/cards`.
///
/// ```text
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// PATCH  /{id}/move               -> move_card
/// GET    /{id}/tasks              -> task::list_by_card
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(card::get_by_id).put(card::update).delete(card::delete),
        )
        .route("/{id}/move", patch(card::move_card))
        .route("/{id}/tasks", get(task::list_by_card))
}
