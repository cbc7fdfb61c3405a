pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

/// Create app router for testing
///
/// This function creates the Axum router with all routes configured,
/// useful for integration testing without starting the full server.
pub fn create_app(db_pool: sqlx::SqlitePool) -> axum::Router {
    use std::sync::Arc;

    let state = AppState {
        pool: db_pool,
        catalog: Arc::new(everfit_diet::RecipeCatalog::builtin()),
    };

    routes::router(state)
}
