//! Handlers for the `/boards` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use kanban_core::error::CoreError;
use kanban_core::types::DbId;
use kanban_db::models::board::{Board, CreateBoard, UpdateBoard};
use kanban_db::repositories::BoardRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::references::{ensure_exists, validate_payload, Entity};
use crate::middleware::json::JsonBody;
use crate::middleware::path::PathParam;
use crate::state::AppState;

/// POST /api/v1/boards
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateBoard>,
) -> AppResult<(StatusCode, Json<Board>)> {
    validate_payload(&state.pool, &input, &[]).await?;
    let board = BoardRepo::create(&state.pool, &input).await?;
    tracing::info!(board_id = board.id, "Board created");
    Ok((StatusCode::CREATED, Json(board)))
}

/// GET /api/v1/boards
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Board>>> {
    let boards = BoardRepo::list(&state.pool).await?;
    Ok(Json(boards))
}

/// GET /api/v1/boards/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Board>> {
    let board = BoardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Board",
            id,
        }))?;
    Ok(Json(board))
}

/// PUT/PATCH /api/v1/boards/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateBoard>,
) -> AppResult<Json<Board>> {
    ensure_exists(&state.pool, Entity::Board, id).await?;
    validate_payload(&state.pool, &input, &[]).await?;

    let board = BoardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Board",
            id,
        }))?;
    tracing::info!(board_id = id, "Board updated");
    Ok(Json(board))
}

/// DELETE /api/v1/boards/{id}
///
/// Cards of the board and their tasks are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BoardRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(board_id = id, "Board deleted with its cards and tasks");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Board",
            id,
        }))
    }
}
