//! Daily diet plan route.
//!
//! Loads the user's stored targets, runs the deterministic planner for the
//! requested date and joins each selection back to full recipe detail for
//! the client.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::AppError;
use crate::routes::profile::load_diet_targets;
use crate::routes::AppState;
use everfit_diet::{build_daily_plan, DietTargets, PlanTotals, PlannedMeal, Recipe};

#[derive(Debug, Deserialize)]
pub struct DailyPlanQuery {
    /// Optional plan date (`YYYY-MM-DD`). Defaults to today (UTC). Mainly
    /// useful for previewing a day and for reproducible responses in tests.
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedMealDetail {
    #[serde(flatten)]
    pub planned: PlannedMeal,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyPlanResponse {
    pub date_key: String,
    pub targets: DietTargets,
    pub meals: Vec<PlannedMealDetail>,
    pub totals: PlanTotals,
}

/// GET /api/users/{user_id}/diet/daily
///
/// 400 with `onboarding_required` when the user has no stored targets yet;
/// 422 when the `date` query parameter is malformed.
#[tracing::instrument(skip(state))]
pub async fn get_daily_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<DailyPlanQuery>,
) -> Result<Json<DailyPlanResponse>, AppError> {
    let row = load_diet_targets(&state.pool, &user_id)
        .await?
        .ok_or(AppError::DietProfileNotConfigured)?;
    let targets = DietTargets::from(&row);

    let date = match query.date {
        Some(raw) => parse_plan_date(&raw)?,
        None => OffsetDateTime::now_utc().date(),
    };

    let plan = build_daily_plan(&targets, date, state.catalog.recipes());

    tracing::debug!(
        date_key = %plan.date_key,
        meals = plan.meals.len(),
        planned_calories = plan.totals.planned_calories,
        "Daily diet plan generated"
    );

    // A selection whose id no longer resolves in the catalog is dropped from
    // the response rather than failing the whole plan.
    let meals: Vec<PlannedMealDetail> = plan
        .meals
        .into_iter()
        .filter_map(|planned| {
            let recipe = state.catalog.find(&planned.recipe_id).cloned()?;
            Some(PlannedMealDetail { planned, recipe })
        })
        .collect();

    Ok(Json(DailyPlanResponse {
        date_key: plan.date_key,
        targets,
        meals,
        totals: plan.totals,
    }))
}

fn parse_plan_date(raw: &str) -> Result<Date, AppError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw, &format)
        .map_err(|_| AppError::Validation(format!("date must be formatted YYYY-MM-DD, got {raw}")))
}
