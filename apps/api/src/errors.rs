use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The auth provider or the store rejected a write on the user's behalf.
    #[error("Upstream rejected request: {0}")]
    Upstream(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => {
                tracing::warn!("Upstream rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Store(msg) => {
                tracing::error!("Store error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
