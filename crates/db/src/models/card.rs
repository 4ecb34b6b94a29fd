//! Card entity model and DTOs.

use kanban_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{explicit_null, is_null, nulls, Payload};

/// A card row from the `cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    pub board_id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// Position within the board, ascending.
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a card. The owning board comes from the URL path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCard {
    #[validate(
        required(message = "The title field is required."),
        length(min = 1, max = 255, message = "The title field must be between 1 and 255 characters.")
    )]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Appended after the last card of the board if omitted.
    #[serde(rename = "order")]
    #[validate(range(min = 0, message = "The order field must be at least 0."))]
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing card. All fields are optional.
///
/// A supplied `board_id` re-parents the card and must reference an
/// existing board. `description` is the only field that `null` clears.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCard {
    #[serde(default, deserialize_with = "explicit_null")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "The title field must be between 1 and 255 characters."
    ))]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub description: Option<Option<String>>,
    #[serde(rename = "order", default, deserialize_with = "explicit_null")]
    #[validate(range(min = 0, message = "The order field must be at least 0."))]
    pub sort_order: Option<Option<i32>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub board_id: Option<Option<DbId>>,
}

/// DTO for `PATCH /cards/{id}/move`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MoveCard {
    #[validate(required(message = "The board_id field is required."))]
    pub board_id: Option<DbId>,
}

impl Payload for CreateCard {}

impl Payload for UpdateCard {
    fn null_fields(&self) -> Vec<&'static str> {
        nulls([
            ("title", is_null(&self.title)),
            ("order", is_null(&self.sort_order)),
            ("board_id", is_null(&self.board_id)),
        ])
    }
}

impl Payload for MoveCard {}
