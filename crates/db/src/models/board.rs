//! Board entity model and DTOs.

use kanban_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{explicit_null, is_null, nulls, Payload};

/// A board row from the `boards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Board {
    pub id: DbId,
    pub name: String,
    /// Client-maintained counter; no operation recomputes it from `cards`.
    #[serde(rename = "numCards")]
    pub num_cards: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new board.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateBoard {
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 255, message = "The name field must be between 1 and 255 characters.")
    )]
    pub name: Option<String>,
    /// Defaults to 0 if omitted.
    #[serde(rename = "numCards")]
    #[validate(range(min = 0, message = "The numCards field must be at least 0."))]
    pub num_cards: Option<i32>,
}

/// DTO for updating an existing board. All fields are optional, but
/// neither may be sent as `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBoard {
    #[serde(default, deserialize_with = "explicit_null")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "The name field must be between 1 and 255 characters."
    ))]
    pub name: Option<Option<String>>,
    #[serde(rename = "numCards", default, deserialize_with = "explicit_null")]
    #[validate(range(min = 0, message = "The numCards field must be at least 0."))]
    pub num_cards: Option<Option<i32>>,
}

impl Payload for CreateBoard {}

impl Payload for UpdateBoard {
    fn null_fields(&self) -> Vec<&'static str> {
        nulls([("name", is_null(&self.name)), ("numCards", is_null(&self.num_cards))])
    }
}
