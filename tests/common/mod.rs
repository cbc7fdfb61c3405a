use axum::Router;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = setup_test_db().await;
    let app = everfit::create_app(pool.clone());
    (app, pool)
}
