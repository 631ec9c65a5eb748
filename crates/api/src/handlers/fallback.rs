use axum::extract::State;
use axum::http::Uri;

use crate::error::AppError;
use crate::state::AppState;

/// Fallback for any path without a route. Always 404.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> AppError {
    state
        .logger
        .error(&format!("404 Not Found: {}", uri.path()), None);
    AppError::NotFound
}
