//! Roman numeral conversion domain logic.
//!
//! Pure functions only: the converter, the shared input rule, and the
//! coercion applied to raw query strings. Nothing here performs I/O.

pub mod coerce;
pub mod error;
pub mod roman;
pub mod validation;
