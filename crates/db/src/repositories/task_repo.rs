//! Repository for the `tasks` table.

use kanban_core::types::DbId;
use sqlx::PgPool;

use crate::models::present;
use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, card_id, task_name, description, start_date, end_date, \
                       allocator, employee, priority, progress, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// The caller must have validated `input` and verified `card_id`.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (card_id, task_name, description, start_date, end_date,
                 allocator, employee, priority, progress)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.card_id)
            .bind(&input.task_name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.allocator)
            .bind(&input.employee)
            .bind(&input.priority)
            .bind(input.progress)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every task in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List the tasks of a single card in insertion order.
    pub async fn list_by_card(pool: &PgPool, card_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE card_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query)
            .bind(card_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Absent fields keep their stored value; an explicit
    /// `null` employee clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                task_name = COALESCE($2, task_name),
                description = COALESCE($3, description),
                priority = COALESCE($4, priority),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                allocator = COALESCE($7, allocator),
                employee = CASE WHEN $11 THEN $8 ELSE employee END,
                progress = COALESCE($9, progress),
                card_id = COALESCE($10, card_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.task_name)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(input.start_date.flatten())
            .bind(input.end_date.flatten())
            .bind(present(&input.allocator))
            .bind(present(&input.employee))
            .bind(input.progress.flatten())
            .bind(input.card_id.flatten())
            .bind(input.employee.is_some())
            .fetch_optional(pool)
            .await
    }

    /// Re-parent a task to another card.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn move_to_card(
        pool: &PgPool,
        id: DbId,
        card_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET card_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(card_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a task with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM tasks WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
