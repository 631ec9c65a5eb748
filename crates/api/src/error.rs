use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use numerals_core::error::CoreError;
use serde_json::json;

/// Body message for requests that match no route.
pub const NOT_FOUND_MESSAGE: &str = "Sorry, can't find that";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ "error": ... }` body every
/// failed request returns.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `numerals_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No route matched the request.
    #[error("Sorry, can't find that")]
    NotFound,

    /// An internal error with a message that is logged but never returned.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Core(core) => match core {
                CoreError::InvalidInput(_) => core.to_string(),
                CoreError::Computation(detail) => {
                    tracing::error!(error = %detail, "Roman numeral composition failed");
                    "Computational error during Roman numeral conversion".to_string()
                }
            },
            AppError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                "An internal error occurred".to_string()
            }
        };

        (self.status(), axum::Json(json!({ "error": message }))).into_response()
    }
}
