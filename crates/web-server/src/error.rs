use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("This email or mobile number is already registered")]
    DuplicateContact { existing_id: Uuid },
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                let body = Json(json!({ "error": "An internal database error occurred" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::NotFound(message) => {
                let body = Json(json!({ "error": message }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::DuplicateContact { existing_id } => {
                // The intake flow uses the existing id to offer a login
                // instead of a second registration.
                let body = Json(json!({
                    "error": "This email or mobile number is already registered.",
                    "existing_business_id": existing_id,
                }));
                (StatusCode::CONFLICT, body).into_response()
            }
        }
    }
}
