//! Handlers for the `/cards` resource.
//!
//! Cards are created and listed under their board:
//! `/boards/{board_id}/cards`. Everything else addresses a card directly:
//! `/cards/{id}[/move]`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use kanban_core::error::CoreError;
use kanban_core::types::DbId;
use kanban_db::models::card::{Card, CreateCard, MoveCard, UpdateCard};
use kanban_db::repositories::CardRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::handlers::references::{ensure_exists, validate_payload, Entity, Reference};
use crate::middleware::json::JsonBody;
use crate::middleware::path::PathParam;
use crate::response::MessageResponse;
use crate::state::AppState;

fn card_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Card", id })
}

/// Position after the last card of the board.
///
/// Fails with a field error on `order` once the last card already sits at
/// the largest storable position.
async fn next_order(pool: &PgPool, board_id: DbId) -> AppResult<i32> {
    let next = CardRepo::next_position(pool, board_id).await?;
    i32::try_from(next).map_err(|_| {
        AppError::Core(CoreError::invalid_field(
            "order",
            "The board has no position left after its last card; send an explicit order.",
        ))
    })
}

/// GET /api/v1/boards/{board_id}/cards
pub async fn list_by_board(
    State(state): State<AppState>,
    PathParam(board_id): PathParam<DbId>,
) -> AppResult<Json<Vec<Card>>> {
    ensure_exists(&state.pool, Entity::Board, board_id).await?;
    let cards = CardRepo::list_by_board(&state.pool, board_id).await?;
    Ok(Json(cards))
}

/// POST /api/v1/boards/{board_id}/cards
///
/// The board comes from the URL path; a missing board is a 404 even when
/// the payload is also invalid.
pub async fn create(
    State(state): State<AppState>,
    PathParam(board_id): PathParam<DbId>,
    JsonBody(input): JsonBody<CreateCard>,
) -> AppResult<(StatusCode, Json<Card>)> {
    ensure_exists(&state.pool, Entity::Board, board_id).await?;
    validate_payload(&state.pool, &input, &[]).await?;

    let sort_order = match input.sort_order {
        Some(order) => order,
        None => next_order(&state.pool, board_id).await?,
    };
    let input = CreateCard {
        sort_order: Some(sort_order),
        ..input
    };
    let card = CardRepo::create(&state.pool, board_id, &input).await?;
    tracing::info!(card_id = card.id, board_id, "Card created");
    Ok((StatusCode::CREATED, Json(card)))
}

/// GET /api/v1/cards/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Card>> {
    let card = CardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| card_not_found(id))?;
    Ok(Json(card))
}

/// PUT /api/v1/cards/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateCard>,
) -> AppResult<Json<Card>> {
    ensure_exists(&state.pool, Entity::Card, id).await?;
    validate_payload(
        &state.pool,
        &input,
        &[Reference::board("board_id", input.board_id.flatten())],
    )
    .await?;

    let card = CardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| card_not_found(id))?;
    tracing::info!(card_id = id, board_id = card.board_id, "Card updated");
    Ok(Json(card))
}

/// PATCH /api/v1/cards/{id}/move
///
/// Re-parents the card to `board_id` and touches nothing else.
pub async fn move_card(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<MoveCard>,
) -> AppResult<Json<MessageResponse<Card>>> {
    ensure_exists(&state.pool, Entity::Card, id).await?;
    validate_payload(
        &state.pool,
        &input,
        &[Reference::board("board_id", input.board_id)],
    )
    .await?;

    let board_id = input.board_id.ok_or_else(|| {
        AppError::Core(CoreError::invalid_field(
            "board_id",
            "The board_id field is required.",
        ))
    })?;
    let card = CardRepo::move_to_board(&state.pool, id, board_id)
        .await?
        .ok_or_else(|| card_not_found(id))?;
    tracing::info!(card_id = id, board_id, "Card moved");
    Ok(Json(MessageResponse {
        message: "Card moved successfully",
        data: card,
    }))
}

/// DELETE /api/v1/cards/{id}
///
/// Tasks of the card are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CardRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(card_id = id, "Card deleted with its tasks");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(card_not_found(id))
    }
}
