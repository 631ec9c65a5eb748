//! Input rule for Roman numeral conversion.
//!
//! This is the one place the accepted domain is defined. The HTTP handler
//! applies it through [`crate::roman::convert`]; client-side pre-flight
//! checks call [`is_valid_numeral_input`] instead of restating the range.

use crate::error::CoreError;

/// Smallest value with a Roman numeral representation.
pub const MIN_NUMERAL: u16 = 1;

/// Largest value representable without overlines.
pub const MAX_NUMERAL: u16 = 3999;

/// Message carried by every rejected input.
pub const INVALID_INPUT_MESSAGE: &str = "Number must be an integer between 1 and 3999";

/// Validate a coerced numeric value and narrow it to `u16`.
///
/// Rejects NaN, infinities, fractional values and anything outside
/// `[MIN_NUMERAL, MAX_NUMERAL]` with `CoreError::InvalidInput`.
pub fn validate_numeral_input(value: f64) -> Result<u16, CoreError> {
    if !value.is_finite()
        || value.fract() != 0.0
        || value < f64::from(MIN_NUMERAL)
        || value > f64::from(MAX_NUMERAL)
    {
        return Err(CoreError::InvalidInput(INVALID_INPUT_MESSAGE.to_string()));
    }
    // In range and integral, so the cast is exact.
    Ok(value as u16)
}

/// Boolean form of [`validate_numeral_input`] for pre-flight checks.
pub fn is_valid_numeral_input(value: f64) -> bool {
    validate_numeral_input(value).is_ok()
}
