use sqlx::PgPool;

/// Connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    kanban_db::health_check(&pool).await.unwrap();

    for table in ["boards", "cards", "tasks"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Both foreign keys must cascade on delete.
#[sqlx::test(migrations = "./migrations")]
async fn test_foreign_keys_cascade_on_delete(pool: PgPool) {
    let rules: Vec<(String, String)> = sqlx::query_as(
        "SELECT tc.table_name::text, rc.delete_rule::text
         FROM information_schema.table_constraints tc
         JOIN information_schema.referential_constraints rc
           ON rc.constraint_name = tc.constraint_name
         WHERE tc.constraint_type = 'FOREIGN KEY'
         ORDER BY tc.table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(
        rules,
        vec![
            ("cards".to_string(), "CASCADE".to_string()),
            ("tasks".to_string(), "CASCADE".to_string()),
        ]
    );
}
