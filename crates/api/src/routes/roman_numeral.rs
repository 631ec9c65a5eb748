use axum::routing::get;
use axum::Router;

use crate::handlers::roman_numeral;
use crate::state::AppState;

/// Mount the conversion route at the root level.
///
/// ```text
/// GET /romannumeral?query={value}    convert to a Roman numeral
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/romannumeral", get(roman_numeral::convert_numeral))
}
