//! Repository for the `boards` table.

use kanban_core::types::DbId;
use sqlx::PgPool;

use crate::models::board::{Board, CreateBoard, UpdateBoard};
use crate::models::present;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, num_cards, created_at, updated_at";

/// Provides CRUD operations for boards.
pub struct BoardRepo;

impl BoardRepo {
    /// Insert a new board, returning the created row.
    ///
    /// If `num_cards` is `None` in the input, defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateBoard) -> Result<Board, sqlx::Error> {
        let query = format!(
            "INSERT INTO boards (name, num_cards)
             VALUES ($1, COALESCE($2, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Board>(&query)
            .bind(&input.name)
            .bind(input.num_cards)
            .fetch_one(pool)
            .await
    }

    /// Find a board by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Board>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boards WHERE id = $1");
        sqlx::query_as::<_, Board>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all boards in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Board>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boards ORDER BY id ASC");
        sqlx::query_as::<_, Board>(&query).fetch_all(pool).await
    }

    /// Update a board. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBoard,
    ) -> Result<Option<Board>, sqlx::Error> {
        let query = format!(
            "UPDATE boards SET
                name = COALESCE($2, name),
                num_cards = COALESCE($3, num_cards),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Board>(&query)
            .bind(id)
            .bind(present(&input.name))
            .bind(input.num_cards.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a board by ID. Returns `true` if a row was removed.
    ///
    /// The foreign keys on `cards` and `tasks` cascade, so the board's cards
    /// and their tasks go away in the same statement.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a board with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM boards WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
