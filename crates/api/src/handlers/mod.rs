pub mod fallback;
pub mod roman_numeral;
