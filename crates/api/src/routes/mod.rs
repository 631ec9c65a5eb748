pub mod roman_numeral;
