//! Diet target storage routes.
//!
//! Targets are computed upstream (BMR/TDEE calculator on the client side)
//! and stored verbatim, one row per user. The daily-plan route reads them
//! back; nothing here recomputes macros.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use validator::Validate;

use crate::error::AppError;
use crate::routes::AppState;
use everfit_diet::DietTargets;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietTargetsResponse {
    pub targets: Option<DietTargets>,
    /// Unix timestamp of the last update, if any.
    pub updated_at: Option<i64>,
    pub onboarding_required: bool,
}

/// PUT body: a full set of daily macro targets.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DietTargetsPayload {
    #[validate(range(min = 0.0, message = "bmr must not be negative"))]
    pub bmr: f64,
    #[validate(range(min = 0.0, message = "tdee must not be negative"))]
    pub tdee: f64,
    #[validate(range(min = 1.0, message = "target_calories must be positive"))]
    pub target_calories: f64,
    #[validate(range(min = 0.0, message = "protein_g must not be negative"))]
    pub protein_g: f64,
    #[validate(range(min = 0.0, message = "carbs_g must not be negative"))]
    pub carbs_g: f64,
    #[validate(range(min = 0.0, message = "fat_g must not be negative"))]
    pub fat_g: f64,
    #[validate(range(min = 0.0, message = "fiber_g must not be negative"))]
    pub fiber_g: f64,
    #[validate(range(min = 0.0, message = "water_ml must not be negative"))]
    pub water_ml: f64,
}

impl From<DietTargetsPayload> for DietTargets {
    fn from(payload: DietTargetsPayload) -> Self {
        DietTargets {
            bmr: payload.bmr,
            tdee: payload.tdee,
            target_calories: payload.target_calories,
            protein_g: payload.protein_g,
            carbs_g: payload.carbs_g,
            fat_g: payload.fat_g,
            fiber_g: payload.fiber_g,
            water_ml: payload.water_ml,
        }
    }
}

#[derive(FromRow)]
pub(super) struct DietTargetsRow {
    bmr: f64,
    tdee: f64,
    target_calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    fiber_g: f64,
    water_ml: f64,
    updated_at: i64,
}

impl From<&DietTargetsRow> for DietTargets {
    fn from(row: &DietTargetsRow) -> Self {
        DietTargets {
            bmr: row.bmr,
            tdee: row.tdee,
            target_calories: row.target_calories,
            protein_g: row.protein_g,
            carbs_g: row.carbs_g,
            fat_g: row.fat_g,
            fiber_g: row.fiber_g,
            water_ml: row.water_ml,
        }
    }
}

/// GET /api/users/{user_id}/diet/targets
///
/// Returns the stored targets, or an `onboarding_required` payload when the
/// user has not completed diet onboarding yet.
#[tracing::instrument(skip(state))]
pub async fn get_diet_targets(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DietTargetsResponse>, AppError> {
    let response = match load_diet_targets(&state.pool, &user_id).await? {
        Some(row) => DietTargetsResponse {
            targets: Some(DietTargets::from(&row)),
            updated_at: Some(row.updated_at),
            onboarding_required: false,
        },
        None => DietTargetsResponse {
            targets: None,
            updated_at: None,
            onboarding_required: true,
        },
    };

    Ok(Json(response))
}

/// PUT /api/users/{user_id}/diet/targets
///
/// Upserts the caller-computed targets for the user. 422 when a field is out
/// of range, 400 on malformed JSON (axum's Json rejection).
#[tracing::instrument(skip(state, payload))]
pub async fn put_diet_targets(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<DietTargetsPayload>,
) -> Result<Json<DietTargetsResponse>, AppError> {
    payload.validate()?;

    let targets = DietTargets::from(payload);
    let updated_at = OffsetDateTime::now_utc().unix_timestamp();
    save_diet_targets(&state.pool, &user_id, &targets, updated_at).await?;

    tracing::info!(
        target_calories = targets.target_calories,
        protein_g = targets.protein_g,
        "Diet targets saved"
    );

    Ok(Json(DietTargetsResponse {
        targets: Some(targets),
        updated_at: Some(updated_at),
        onboarding_required: false,
    }))
}

pub(super) async fn load_diet_targets(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<DietTargetsRow>, sqlx::Error> {
    sqlx::query_as::<_, DietTargetsRow>(
        r#"
        SELECT bmr, tdee, target_calories, protein_g, carbs_g, fat_g, fiber_g, water_ml, updated_at
        FROM diet_targets
        WHERE user_id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

async fn save_diet_targets(
    pool: &SqlitePool,
    user_id: &str,
    targets: &DietTargets,
    updated_at: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO diet_targets
            (user_id, bmr, tdee, target_calories, protein_g, carbs_g, fat_g, fiber_g, water_ml, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        ON CONFLICT(user_id) DO UPDATE SET
            bmr = excluded.bmr,
            tdee = excluded.tdee,
            target_calories = excluded.target_calories,
            protein_g = excluded.protein_g,
            carbs_g = excluded.carbs_g,
            fat_g = excluded.fat_g,
            fiber_g = excluded.fiber_g,
            water_ml = excluded.water_ml,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(user_id)
    .bind(targets.bmr)
    .bind(targets.tdee)
    .bind(targets.target_calories)
    .bind(targets.protein_g)
    .bind(targets.carbs_g)
    .bind(targets.fat_g)
    .bind(targets.fiber_g)
    .bind(targets.water_ml)
    .bind(updated_at)
    .execute(pool)
    .await?;

    Ok(())
}
