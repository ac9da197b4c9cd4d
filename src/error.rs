//! Error types for the tidytask server
//!
//! All errors use thiserror for structured error handling. The
//! `IntoResponse` impl maps each variant to the status code the HTTP
//! API surfaces, so handlers can return `Result<T>` directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Todo not found: {0}")]
    TodoNotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Body of every error response
#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::TodoNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Database(_) | AppError::Io(_) | AppError::Generic(_) => {
                tracing::error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
