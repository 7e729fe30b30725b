use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use harvest_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Field validation failures are never errors: they travel in the response
/// body. Only malformed requests end up here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `harvest_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::UnknownField(name) => (
                    StatusCode::BAD_REQUEST,
                    "UNKNOWN_FIELD",
                    format!("Unknown field '{name}'"),
                ),
                CoreError::UnknownContext(name) => (
                    StatusCode::BAD_REQUEST,
                    "UNKNOWN_CONTEXT",
                    format!("Unknown form context '{name}'"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        tracing::debug!(%code, error = %message, "Rejecting request");

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
