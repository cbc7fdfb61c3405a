use std::sync::Arc;

use axum::{routing::get, Router};
use everfit_diet::RecipeCatalog;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

mod diet;
mod health;
mod profile;
mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Built once at startup; immutable for the life of the process.
    pub catalog: Arc<RecipeCatalog>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no state beyond the pool)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                .route("/api/recipes", get(recipes::list_recipes))
                .route(
                    "/api/users/{user_id}/diet/targets",
                    get(profile::get_diet_targets).put(profile::put_diet_targets),
                )
                .route(
                    "/api/users/{user_id}/diet/daily",
                    get(diet::get_daily_plan),
                )
                .with_state(app_state),
        )
        .layer(TraceLayer::new_for_http())
}
