use axum::{extract::State, Json};
use serde::Serialize;

use crate::routes::AppState;
use everfit_diet::Recipe;

#[derive(Debug, Clone, Serialize)]
pub struct RecipesResponse {
    pub recipes: Vec<Recipe>,
}

/// GET /api/recipes - the static recipe catalog, in catalog order.
#[tracing::instrument(skip(state))]
pub async fn list_recipes(State(state): State<AppState>) -> Json<RecipesResponse> {
    Json(RecipesResponse {
        recipes: state.catalog.recipes().to_vec(),
    })
}
