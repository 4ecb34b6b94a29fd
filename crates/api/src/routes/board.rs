//! Route definitions for the `/boards` resource.
//!
//! Also nests card creation and listing under `/boards/{board_id}/cards`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{board, card};
use crate::state::AppState;

/// Routes mounted at `/boards`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// PATCH  /{id}                    -> update
/// DELETE /{id}                    -> delete
///
/// GET    /{id}/cards              -> card::list_by_board
/// POST   /{id}/cards              -> card::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(board::list).post(board::create))
        .route(
            "/{id}",
            get(board::get_by_id)
                .put(board::update)
                .patch(board::update)
                .delete(board::delete),
        )
        .route(
            "/{id}/cards",
            get(card::list_by_board).post(card::create),
        )
}
