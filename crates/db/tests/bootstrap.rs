use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    boxreview_db::health_check(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM annotations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0, "annotations should start empty");
}

/// The review flags must default to false at the column level.
#[sqlx::test(migrations = "./migrations")]
async fn test_flag_columns_default_false(pool: PgPool) {
    let row: (bool, bool) = sqlx::query_as(
        "INSERT INTO annotations (class_label, confidence, center_x, center_y, width, height)
         VALUES ('car', 0.5, 1, 2, 3, 4)
         RETURNING altered, flagged",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(row, (false, false));
}
