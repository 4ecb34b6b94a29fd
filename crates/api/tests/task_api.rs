//! HTTP-level integration tests for the `/tasks` endpoints and the
//! card-scoped `/cards/{id}/tasks` listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, date_from_today, delete, get, patch_json, post_json, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

/// Create a board with one card and return the card id.
async fn seed_card(pool: &PgPool) -> i64 {
    let board_id = common::create_board(pool, "Board").await;
    common::create_card(pool, board_id, "To Do").await
}

fn update_payload() -> Value {
    json!({
        "taskName": "Renamed",
        "description": "Updated description",
        "priority": "Media"
    })
}

async fn task_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_returns_201(pool: PgPool) {
    let card_id = seed_card(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tasks",
        common::task_payload(card_id, "2030-06-30"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["card_id"], card_id);
    assert_eq!(json["taskName"], "Write report");
    assert_eq!(json["startDate"], "2025-10-01");
    assert_eq!(json["endDate"], "2030-06-30");
    assert_eq!(json["allocator"], "Jane Doe");
    assert_eq!(json["employee"], "John Smith");
    assert_eq!(json["priority"], "Alta");
    assert_eq!(json["progress"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_without_employee(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let mut payload = common::task_payload(card_id, "2030-06-30");
    payload.as_object_mut().unwrap().remove("employee");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/tasks", payload).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["employee"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_with_missing_card_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/tasks",
        common::task_payload(999999, "2030-06-30"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["card_id"][0], "The selected card_id is invalid.");
    assert_eq!(task_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_with_missing_fields_returns_422(pool: PgPool) {
    let card_id = seed_card(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/tasks", json!({"card_id": card_id})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["errors"]["allocator"][0],
        "The allocator field is required."
    );
    assert_eq!(
        json["errors"]["priority"][0],
        "The priority field is required."
    );
    assert!(json["errors"]["taskName"].is_array());
    assert!(json["errors"]["endDate"].is_array());
    assert!(json["errors"]["task_name"].is_null());
    assert!(json["errors"]["card_id"].is_null());
    assert_eq!(task_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_with_unknown_priority_returns_422(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let mut payload = common::task_payload(card_id, "2030-06-30");
    payload["priority"] = json!("Urgent");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/tasks", payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"]["priority"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_with_long_allocator_returns_422(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let mut payload = common::task_payload(card_id, "2030-06-30");
    payload["allocator"] = json!("a".repeat(51));

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/tasks", payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["errors"]["allocator"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_with_negative_progress_returns_422(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let mut payload = common::task_payload(card_id, "2030-06-30");
    payload["progress"] = json!(-1);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/tasks", payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["errors"]["progress"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_with_malformed_date_returns_422(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let payload = common::task_payload(card_id, "30/06/2030");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/tasks", payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["errors"]["body"].is_array());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_and_get_tasks(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let first = common::create_task(&pool, card_id, "2030-01-01").await;
    let second = common::create_task(&pool, card_id, "2030-01-02").await;

    let app = common::build_test_app(pool.clone());
    let list = body_json(get(app, "/api/v1/tasks").await).await;
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/tasks/{second}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["endDate"], "2030-01-02");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tasks/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_tasks_of_card(pool: PgPool) {
    let board_id = common::create_board(&pool, "Board").await;
    let todo = common::create_card(&pool, board_id, "To Do").await;
    let done = common::create_card(&pool, board_id, "Done").await;
    let mine = common::create_task(&pool, todo, "2030-01-01").await;
    common::create_task(&pool, done, "2030-01-01").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/cards/{todo}/tasks")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let tasks = json.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], mine);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/cards/999999/tasks").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_returns_message_and_task(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let task_id = common::create_task(&pool, card_id, "2030-01-01").await;

    let mut payload = update_payload();
    payload["progress"] = json!(40);

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/v1/tasks/{task_id}"), payload).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Task updated successfully");
    assert_eq!(json["data"]["taskName"], "Renamed");
    assert_eq!(json["data"]["description"], "Updated description");
    assert_eq!(json["data"]["priority"], "Media");
    assert_eq!(json["data"]["progress"], 40);
    // Fields not sent are kept.
    assert_eq!(json["data"]["allocator"], "Jane Doe");
    assert_eq!(json["data"]["endDate"], "2030-01-01");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_without_required_fields_leaves_it_unchanged(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let task_id = common::create_task(&pool, card_id, "2030-01-01").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/tasks/{task_id}"),
        json!({"progress": 90}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["errors"]["description"][0],
        "The description field is required."
    );
    assert_eq!(
        json["errors"]["priority"][0],
        "The priority field is required."
    );

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/tasks/{task_id}")).await).await;
    assert_eq!(json["progress"], 0);
    assert_eq!(json["taskName"], "Write report");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_with_past_end_date_returns_422(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let task_id = common::create_task(&pool, card_id, "2030-01-01").await;

    let mut payload = update_payload();
    payload["endDate"] = json!(date_from_today(-1));

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/v1/tasks/{task_id}"), payload).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/tasks/{task_id}")).await).await;
    assert_eq!(json["endDate"], "2030-01-01");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_with_today_end_date_succeeds(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let task_id = common::create_task(&pool, card_id, "2030-01-01").await;

    let today = date_from_today(0);
    let mut payload = update_payload();
    payload["endDate"] = json!(today);

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/v1/tasks/{task_id}"), payload).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["endDate"], today);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_with_missing_card_returns_422(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let task_id = common::create_task(&pool, card_id, "2030-01-01").await;

    let mut payload = update_payload();
    payload["card_id"] = json!(999999);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/v1/tasks/{task_id}"), payload).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["errors"]["card_id"].is_array());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/tasks/{task_id}")).await).await;
    assert_eq!(json["card_id"], card_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_with_null_allocator_returns_422(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let task_id = common::create_task(&pool, card_id, "2030-06-30").await;
    let mut payload = update_payload();
    payload["allocator"] = Value::Null;
    payload["endDate"] = Value::Null;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/v1/tasks/{task_id}"), payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["errors"]["allocator"][0],
        "The allocator field is required."
    );
    assert_eq!(json["errors"]["endDate"][0], "The endDate field is required.");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/tasks/{task_id}")).await).await;
    assert_eq!(json["taskName"], "Write report");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_with_null_employee_clears_it(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let task_id = common::create_task(&pool, card_id, "2030-06-30").await;
    let mut payload = update_payload();
    payload["employee"] = Value::Null;

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/v1/tasks/{task_id}"), payload).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["employee"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_task_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/tasks/999999", update_payload()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_move_task_to_other_card(pool: PgPool) {
    let board_id = common::create_board(&pool, "Board").await;
    let todo = common::create_card(&pool, board_id, "To Do").await;
    let doing = common::create_card(&pool, board_id, "Doing").await;
    let task_id = common::create_task(&pool, todo, "2030-01-01").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/tasks/update-card-id/{task_id}"),
        json!({"card_id": doing}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Task moved successfully");
    assert_eq!(json["data"]["card_id"], doing);
    assert_eq!(json["data"]["taskName"], "Write report");

    let app = common::build_test_app(pool);
    let tasks = body_json(get(app, &format!("/api/v1/cards/{todo}/tasks")).await).await;
    assert!(tasks.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_move_task_to_missing_card_returns_422(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let task_id = common::create_task(&pool, card_id, "2030-01-01").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/tasks/update-card-id/{task_id}"),
        json!({"card_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["card_id"][0], "The selected card_id is invalid.");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/tasks/{task_id}")).await).await;
    assert_eq!(json["card_id"], card_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_move_missing_task_returns_404(pool: PgPool) {
    let card_id = seed_card(&pool).await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/v1/tasks/update-card-id/999999",
        json!({"card_id": card_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Days left
// ---------------------------------------------------------------------------

async fn days_left_for(pool: &PgPool, end_date: &str) -> Value {
    let card_id = seed_card(pool).await;
    let task_id = common::create_task(pool, card_id, end_date).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/tasks/daysLeft/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_days_left_for_future_deadline(pool: PgPool) {
    let json = days_left_for(&pool, &date_from_today(1)).await;
    assert_eq!(json["remaining_days"], 1);
    assert_eq!(json["detail"], "time remaining");
    assert_eq!(json["taskName"], "Write report");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_days_left_for_deadline_today(pool: PgPool) {
    let json = days_left_for(&pool, &date_from_today(0)).await;
    assert_eq!(json["remaining_days"], 0);
    assert_eq!(json["detail"], "already finished");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_days_left_for_past_deadline(pool: PgPool) {
    let json = days_left_for(&pool, &date_from_today(-1)).await;
    assert_eq!(json["remaining_days"], -1);
    assert_eq!(json["detail"], "already finished");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_days_left_for_missing_task_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tasks/daysLeft/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_task_returns_204_then_404(pool: PgPool) {
    let card_id = seed_card(&pool).await;
    let task_id = common::create_task(&pool, card_id, "2030-01-01").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/tasks/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/tasks/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/tasks/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The card survives its task.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/cards/{card_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_board_card_task_lifecycle(pool: PgPool) {
    let board_id = common::create_board(&pool, "Sprint 1").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/boards/{board_id}/cards"),
        json!({"title": "To Do", "order": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let card_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/tasks",
        common::task_payload(card_id, "2025-10-05"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let task_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/tasks/daysLeft/{task_id}")).await).await;
    let expected = (chrono::NaiveDate::from_ymd_opt(2025, 10, 5).unwrap()
        - kanban_core::deadline::today())
    .num_days();
    assert_eq!(json["remaining_days"], expected);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/boards/{board_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/tasks/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
