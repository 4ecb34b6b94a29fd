//! Task entity model and DTOs.
//!
//! JSON field names follow the public API (`taskName`, `startDate`,
//! `endDate`); columns are snake_case.

use kanban_core::types::{Date, DbId, Timestamp};
use kanban_core::validation::{not_blank, today_or_later, valid_priority};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{explicit_null, is_null, nulls, Payload};

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub card_id: DbId,
    #[serde(rename = "taskName")]
    pub task_name: String,
    pub description: String,
    #[serde(rename = "startDate")]
    pub start_date: Date,
    #[serde(rename = "endDate")]
    pub end_date: Date,
    /// Who created or assigned the task. Free text.
    pub allocator: String,
    /// Who the task is assigned to. Free text.
    pub employee: Option<String>,
    pub priority: String,
    pub progress: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task. Everything but `employee` is required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(required(message = "The card_id field is required."))]
    pub card_id: Option<DbId>,
    #[serde(rename = "taskName")]
    #[validate(
        required(message = "The taskName field is required."),
        length(max = 255, message = "The taskName field must not be greater than 255 characters."),
        custom(function = "not_blank")
    )]
    pub task_name: Option<String>,
    #[validate(
        required(message = "The description field is required."),
        custom(function = "not_blank")
    )]
    pub description: Option<String>,
    #[serde(rename = "startDate")]
    #[validate(required(message = "The startDate field is required."))]
    pub start_date: Option<Date>,
    #[serde(rename = "endDate")]
    #[validate(required(message = "The endDate field is required."))]
    pub end_date: Option<Date>,
    #[validate(
        required(message = "The allocator field is required."),
        length(max = 50, message = "The allocator field must not be greater than 50 characters."),
        custom(function = "not_blank")
    )]
    pub allocator: Option<String>,
    #[validate(length(
        max = 75,
        message = "The employee field must not be greater than 75 characters."
    ))]
    pub employee: Option<String>,
    #[validate(
        required(message = "The priority field is required."),
        custom(function = "valid_priority")
    )]
    pub priority: Option<String>,
    #[validate(
        required(message = "The progress field is required."),
        range(min = 0, message = "The progress field must be at least 0.")
    )]
    pub progress: Option<i32>,
}

/// DTO for `PUT /tasks/{id}`.
///
/// `taskName`, `description` and `priority` must be sent on every update;
/// the remaining fields are applied only when present. A supplied `endDate`
/// must be today or later. `employee` is the only field that `null` clears.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[serde(rename = "taskName")]
    #[validate(
        required(message = "The taskName field is required."),
        length(max = 255, message = "The taskName field must not be greater than 255 characters."),
        custom(function = "not_blank")
    )]
    pub task_name: Option<String>,
    #[validate(
        required(message = "The description field is required."),
        custom(function = "not_blank")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "The priority field is required."),
        custom(function = "valid_priority")
    )]
    pub priority: Option<String>,
    #[serde(rename = "startDate", default, deserialize_with = "explicit_null")]
    pub start_date: Option<Option<Date>>,
    #[serde(rename = "endDate", default, deserialize_with = "explicit_null")]
    #[validate(custom(function = "today_or_later"))]
    pub end_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "explicit_null")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "The allocator field must be between 1 and 50 characters."
    ))]
    pub allocator: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    #[validate(length(
        max = 75,
        message = "The employee field must not be greater than 75 characters."
    ))]
    pub employee: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    #[validate(range(min = 0, message = "The progress field must be at least 0."))]
    pub progress: Option<Option<i32>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub card_id: Option<Option<DbId>>,
}

/// DTO for `PATCH /tasks/update-card-id/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MoveTask {
    #[validate(required(message = "The card_id field is required."))]
    pub card_id: Option<DbId>,
}

impl Payload for CreateTask {}

impl Payload for UpdateTask {
    fn null_fields(&self) -> Vec<&'static str> {
        nulls([
            ("startDate", is_null(&self.start_date)),
            ("endDate", is_null(&self.end_date)),
            ("allocator", is_null(&self.allocator)),
            ("progress", is_null(&self.progress)),
            ("card_id", is_null(&self.card_id)),
        ])
    }
}

impl Payload for MoveTask {}
