//! Database test fixtures and utilities
//!
//! Postgres tests need a real server. They read `TEST_DATABASE_URL` and are
//! skipped (return early) when it is not set.

use blog_api::backend::store::PgStore;

/// Connect to the test database, run migrations and clear all rows.
///
/// Returns `None` when `TEST_DATABASE_URL` is not set.
pub async fn test_pg_store() -> Option<PgStore> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping Postgres test");
        return None;
    };

    let store = PgStore::connect(&database_url)
        .await
        .expect("Failed to create test database pool");
    store.migrate().await.expect("Failed to run migrations");
    cleanup_test_data(&store).await;
    Some(store)
}

/// Remove all test data while preserving the schema
pub async fn cleanup_test_data(store: &PgStore) {
    sqlx::query("TRUNCATE TABLE posts, users CASCADE")
        .execute(store.pool())
        .await
        .expect("Failed to clean test data");
}
