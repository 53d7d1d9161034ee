use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fieldtrack_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for storage
/// failures. Implements [`IntoResponse`] to produce the API's
/// `{"success": false, "message": ...}` error shape. The contract defines
/// no machine-readable error codes beyond the status itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fieldtrack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx. Never shown to the caller.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::InvalidCredentials(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            },
            AppError::Database(err) => {
                // Log the real error; the caller only sees a generic message.
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
