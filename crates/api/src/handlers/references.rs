//! Existence checks shared by every handler.
//!
//! Ids in the URL path that do not exist are a 404. Ids inside a request
//! payload (`board_id`, `card_id`) that do not exist are a field-level 422,
//! reported together with the payload's other validation failures.

use kanban_core::error::CoreError;
use kanban_core::types::DbId;
use kanban_db::models::Payload;
use kanban_db::repositories::{BoardRepo, CardRepo, TaskRepo};
use sqlx::PgPool;

use crate::error::AppResult;

/// The entity an id points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Board,
    Card,
    Task,
}

impl Entity {
    /// Name used in not-found messages.
    pub fn name(self) -> &'static str {
        match self {
            Entity::Board => "Board",
            Entity::Card => "Card",
            Entity::Task => "Task",
        }
    }

    async fn exists(self, pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        match self {
            Entity::Board => BoardRepo::exists(pool, id).await,
            Entity::Card => CardRepo::exists(pool, id).await,
            Entity::Task => TaskRepo::exists(pool, id).await,
        }
    }
}

/// A payload field holding the id of another entity.
///
/// `None` means the field was absent; presence is the payload's own
/// validation concern.
#[derive(Debug, Clone, Copy)]
pub struct Reference {
    pub entity: Entity,
    pub field: &'static str,
    pub id: Option<DbId>,
}

impl Reference {
    pub fn board(field: &'static str, id: Option<DbId>) -> Self {
        Self {
            entity: Entity::Board,
            field,
            id,
        }
    }

    pub fn card(field: &'static str, id: Option<DbId>) -> Self {
        Self {
            entity: Entity::Card,
            field,
            id,
        }
    }
}

/// Verify that the entity identified by a path id exists, returning NotFound if not.
pub async fn ensure_exists(pool: &PgPool, entity: Entity, id: DbId) -> AppResult<()> {
    if !entity.exists(pool, id).await? {
        return Err(CoreError::NotFound {
            entity: entity.name(),
            id,
        }
        .into());
    }
    Ok(())
}

/// Validate a payload's fields and the ids it references in one pass.
///
/// Reference checks are skipped for fields that already failed field
/// validation, so each bad field gets a single relevant message.
pub async fn validate_payload<T: Payload>(
    pool: &PgPool,
    input: &T,
    references: &[Reference],
) -> AppResult<()> {
    let mut errors = input.field_errors();

    for reference in references {
        let Some(id) = reference.id else { continue };
        if errors.contains_key(reference.field) {
            continue;
        }
        if !reference.entity.exists(pool, id).await? {
            errors.insert(
                reference.field.to_string(),
                vec![format!("The selected {} is invalid.", reference.field)],
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(errors).into())
    }
}
