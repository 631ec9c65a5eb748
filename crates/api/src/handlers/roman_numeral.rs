//! Handler for the Roman numeral conversion endpoint.

use axum::extract::State;
use axum::Json;
use numerals_core::roman;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::ConversionRequest;
use crate::state::AppState;

/// Successful conversion: the raw input echoed back with its numeral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub input: String,
    pub output: String,
}

/// GET /romannumeral?query={value}
///
/// Convert the `query` value to a Roman numeral. Values that are not an
/// integer in `1..=3999` after coercion are rejected with 400.
pub async fn convert_numeral(
    State(state): State<AppState>,
    request: ConversionRequest,
) -> AppResult<Json<ConversionResult>> {
    state.logger.info("GET /romannumeral called");

    let output = match roman::convert(request.numeric_value()) {
        Ok(output) => output,
        Err(err) => {
            state.logger.error("Error in GET /romannumeral", Some(&err));
            return Err(AppError::Core(err));
        }
    };

    state
        .logger
        .info(&format!("GET /romannumeral result: {output}"));

    // Only a single value can convert successfully.
    let input = request.raw().unwrap_or_default().to_string();
    Ok(Json(ConversionResult { input, output }))
}
