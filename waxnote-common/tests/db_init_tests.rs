//! Integration tests for database initialization

use waxnote_common::db::init_database;

#[tokio::test]
async fn test_init_creates_database_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("waxnote.db");

    let pool = init_database(&db_path).await.expect("init failed");

    assert!(db_path.exists(), "database file should be created");

    // Schema should be queryable immediately
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(&pool)
        .await
        .expect("reviews table should exist");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_init_creates_missing_parent_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("nested").join("folders").join("waxnote.db");

    init_database(&db_path).await.expect("init failed");

    assert!(db_path.exists());
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("waxnote.db");

    let pool = init_database(&db_path).await.expect("first init failed");

    sqlx::query(
        "INSERT INTO reviews (guid, album_name, artist, description, rating) \
         VALUES ('g-1', 'Kind of Blue', 'Miles Davis', 'essential', 5)",
    )
    .execute(&pool)
    .await
    .expect("insert failed");
    pool.close().await;

    // Re-opening must not drop or recreate existing data
    let pool = init_database(&db_path).await.expect("second init failed");
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(&pool)
        .await
        .expect("query failed");
    assert_eq!(count, 1);
}
