//! Repository for the `cards` table.

use kanban_core::types::DbId;
use sqlx::PgPool;

use crate::models::card::{Card, CreateCard, UpdateCard};
use crate::models::present;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, board_id, title, description, sort_order, created_at, updated_at";

/// Provides CRUD operations for cards.
pub struct CardRepo;

impl CardRepo {
    /// Insert a new card under `board_id`, returning the created row.
    ///
    /// If `sort_order` is `None`, the card is placed after the last card of
    /// the board (0 for the first card).
    pub async fn create(
        pool: &PgPool,
        board_id: DbId,
        input: &CreateCard,
    ) -> Result<Card, sqlx::Error> {
        let query = format!(
            "INSERT INTO cards (board_id, title, description, sort_order)
             VALUES ($1, $2, $3, COALESCE($4,
                (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM cards WHERE board_id = $1)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(board_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Position just after the last card of `board_id` (0 for an empty
    /// board). Computed as BIGINT so a board whose last card sits at
    /// `i32::MAX` reports a value the caller can reject.
    pub async fn next_position(pool: &PgPool, board_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(MAX(sort_order)::BIGINT + 1, 0) FROM cards WHERE board_id = $1",
        )
        .bind(board_id)
        .fetch_one(pool)
        .await
    }

    /// Find a card by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE id = $1");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the cards of a board by position, ties broken by ID.
    pub async fn list_by_board(pool: &PgPool, board_id: DbId) -> Result<Vec<Card>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cards WHERE board_id = $1 ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(board_id)
            .fetch_all(pool)
            .await
    }

    /// Update a card. Only fields present in `input` are applied; an
    /// explicit `null` description clears it.
    ///
    /// The caller must have rejected nulls for the other fields and
    /// verified a supplied `board_id`.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCard,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!(
            "UPDATE cards SET
                title = COALESCE($2, title),
                description = CASE WHEN $6 THEN $3 ELSE description END,
                sort_order = COALESCE($4, sort_order),
                board_id = COALESCE($5, board_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(present(&input.title))
            .bind(present(&input.description))
            .bind(input.sort_order.flatten())
            .bind(input.board_id.flatten())
            .bind(input.description.is_some())
            .fetch_optional(pool)
            .await
    }

    /// Re-parent a card to another board, leaving every other field as is.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn move_to_board(
        pool: &PgPool,
        id: DbId,
        board_id: DbId,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!(
            "UPDATE cards SET board_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(board_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a card by ID, cascading to its tasks. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a card with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cards WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
