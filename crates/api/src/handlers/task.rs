//! Handlers for the `/tasks` resource.
//!
//! Tasks are addressed directly (`/tasks/{id}`) and carry their card in the
//! payload. The card-scoped listing lives under `/cards/{card_id}/tasks`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use kanban_core::deadline::{self, DeadlineStatus};
use kanban_core::error::CoreError;
use kanban_core::types::{Date, DbId};
use kanban_db::models::task::{CreateTask, MoveTask, Task, UpdateTask};
use kanban_db::repositories::TaskRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::references::{ensure_exists, validate_payload, Entity, Reference};
use crate::middleware::json::JsonBody;
use crate::middleware::path::PathParam;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Response body for `GET /tasks/daysLeft/{id}`.
#[derive(Debug, Serialize)]
pub struct DaysLeft {
    pub id: DbId,
    #[serde(rename = "taskName")]
    pub task_name: String,
    #[serde(rename = "endDate")]
    pub end_date: Date,
    /// Signed calendar days until `end_date`; negative once overdue.
    pub remaining_days: i64,
    pub detail: DeadlineStatus,
}

impl DaysLeft {
    /// Compute the days left for `task` as of `today`.
    pub fn for_task(task: Task, today: Date) -> Self {
        let remaining_days = deadline::remaining_days(task.end_date, today);
        Self {
            id: task.id,
            task_name: task.task_name,
            end_date: task.end_date,
            remaining_days,
            detail: DeadlineStatus::from_remaining_days(remaining_days),
        }
    }
}

fn task_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

/// GET /api/v1/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/cards/{card_id}/tasks
pub async fn list_by_card(
    State(state): State<AppState>,
    PathParam(card_id): PathParam<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    ensure_exists(&state.pool, Entity::Card, card_id).await?;
    let tasks = TaskRepo::list_by_card(&state.pool, card_id).await?;
    Ok(Json(tasks))
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validate_payload(
        &state.pool,
        &input,
        &[Reference::card("card_id", input.card_id)],
    )
    .await?;

    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(task_id = task.id, card_id = task.card_id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| task_not_found(id))?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
///
/// `taskName`, `description` and `priority` are required on every call.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateTask>,
) -> AppResult<Json<MessageResponse<Task>>> {
    ensure_exists(&state.pool, Entity::Task, id).await?;
    validate_payload(
        &state.pool,
        &input,
        &[Reference::card("card_id", input.card_id.flatten())],
    )
    .await?;

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| task_not_found(id))?;
    tracing::info!(task_id = id, "Task updated");
    Ok(Json(MessageResponse {
        message: "Task updated successfully",
        data: task,
    }))
}

/// PATCH /api/v1/tasks/update-card-id/{id}
///
/// Re-parents the task to `card_id`, which must reference an existing card.
pub async fn move_task(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<MoveTask>,
) -> AppResult<Json<MessageResponse<Task>>> {
    ensure_exists(&state.pool, Entity::Task, id).await?;
    validate_payload(
        &state.pool,
        &input,
        &[Reference::card("card_id", input.card_id)],
    )
    .await?;

    let card_id = input.card_id.ok_or_else(|| {
        AppError::Core(CoreError::invalid_field(
            "card_id",
            "The card_id field is required.",
        ))
    })?;
    let task = TaskRepo::move_to_card(&state.pool, id, card_id)
        .await?
        .ok_or_else(|| task_not_found(id))?;
    tracing::info!(task_id = id, card_id, "Task moved");
    Ok(Json(MessageResponse {
        message: "Task moved successfully",
        data: task,
    }))
}

/// GET /api/v1/tasks/daysLeft/{id}
pub async fn days_left(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<DaysLeft>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| task_not_found(id))?;
    Ok(Json(DaysLeft::for_task(task, deadline::today())))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(task_id = id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(task_not_found(id))
    }
}
