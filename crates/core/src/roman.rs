//! Roman numeral converter.
//!
//! A value is split into its four place-value digits and each digit is
//! looked up in a fixed table of canonical subtractive encodings. The
//! resolved parts are concatenated thousands first.

use crate::error::CoreError;
use crate::validation::{validate_numeral_input, MAX_NUMERAL, MIN_NUMERAL};

const THOUSANDS: [&str; 4] = ["", "M", "MM", "MMM"];
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const UNITS: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Convert a coerced numeric value to its Roman numeral.
///
/// The value must be an integer in `1..=3999`; anything else (including NaN
/// and infinities) fails with [`CoreError::InvalidInput`] before any lookup
/// happens.
///
/// # Examples
///
/// ```
/// use numerals_core::roman::convert;
///
/// assert_eq!(convert(42.0).unwrap(), "XLII");
/// assert_eq!(convert(3999.0).unwrap(), "MMMCMXCIX");
/// assert!(convert(0.0).is_err());
/// ```
pub fn convert(number: f64) -> Result<String, CoreError> {
    let value = validate_numeral_input(number)?;
    to_roman(value)
}

/// Compose the numeral for an already-validated value.
///
/// Returns [`CoreError::Computation`] if a digit falls outside its table,
/// which only happens for values above `MAX_NUMERAL`.
pub fn to_roman(value: u16) -> Result<String, CoreError> {
    let value = usize::from(value);

    let parts = [
        lookup(&THOUSANDS, value / 1000, "thousands")?,
        lookup(&HUNDREDS, (value % 1000) / 100, "hundreds")?,
        lookup(&TENS, (value % 100) / 10, "tens")?,
        lookup(&UNITS, value % 10, "units")?,
    ];

    let numeral = parts.concat();
    if numeral.is_empty() {
        return Err(CoreError::Computation(format!(
            "value {value} has no numeral representation"
        )));
    }
    Ok(numeral)
}

fn lookup(table: &[&'static str], digit: usize, place: &str) -> Result<&'static str, CoreError> {
    table.get(digit).copied().ok_or_else(|| {
        CoreError::Computation(format!("{place} digit {digit} has no table entry"))
    })
}

/// Parse a canonical Roman numeral back to its value.
///
/// Only numerals that [`to_roman`] would produce are accepted, so
/// non-canonical spellings such as `"IIII"` or `"IC"` return `None`, as do
/// lowercase input and the empty string.
pub fn from_roman(numeral: &str) -> Option<u16> {
    let values: Vec<i32> = numeral.chars().map(symbol_value).collect::<Option<_>>()?;

    let mut total: i32 = 0;
    for (i, &value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if value < next => total -= value,
            _ => total += value,
        }
    }

    let value = u16::try_from(total).ok()?;
    if !(MIN_NUMERAL..=MAX_NUMERAL).contains(&value) {
        return None;
    }

    // Reject spellings that sum correctly but are not canonical.
    match to_roman(value) {
        Ok(canonical) if canonical == numeral => Some(value),
        _ => None,
    }
}

fn symbol_value(symbol: char) -> Option<i32> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}
