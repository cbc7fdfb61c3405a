use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Diet profile not configured")]
    DietProfileNotConfigured,
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": message }),
            ),
            AppError::DietProfileNotConfigured => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Diet profile not configured",
                    "onboarding_required": true,
                }),
            ),
            AppError::Database(error) => {
                tracing::error!("Database error: {:?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "An unexpected error occurred. Please try again later.",
                    }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_unprocessable_entity() {
        let response = AppError::Validation("target_calories must be positive".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn missing_profile_maps_to_bad_request() {
        let response = AppError::DietProfileNotConfigured.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_error_hides_details_from_the_client() {
        let response = AppError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
