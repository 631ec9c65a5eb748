//! Numeric coercion for raw query values.
//!
//! Mirrors the string-to-number conversion browsers and JavaScript servers
//! apply to form input, so the service accepts exactly what its clients
//! consider numeric. Anything unparseable becomes NaN and is rejected later
//! by the validation rule rather than surfacing as a separate error.

/// Coerce a raw string to a number.
///
/// - Surrounding whitespace is ignored and a blank string is `0`.
/// - `0x`, `0o` and `0b` prefixes (either case, unsigned) parse as integers.
/// - `Infinity` with an optional sign is infinite.
/// - Otherwise the text must be a decimal literal with an optional sign,
///   fraction and exponent.
///
/// Everything else, including `inf` and `nan` spellings, yields NaN.
pub fn coerce_to_number(raw: &str) -> f64 {
    let text = raw.trim_matches(is_js_whitespace);
    if text.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_radix_literal(text) {
        return value;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if is_decimal_literal(text) {
        text.trim_start_matches('+').parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Hex, octal or binary integer literal. `None` when `text` has no prefix.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(text: &str) -> bool {
    let mut chars = text.chars().peekable();

    if matches!(chars.peek(), Some(&('+' | '-'))) {
        chars.next();
    }

    let mut mantissa_digits = 0;
    while chars.next_if(char::is_ascii_digit).is_some() {
        mantissa_digits += 1;
    }
    if chars.next_if_eq(&'.').is_some() {
        while chars.next_if(char::is_ascii_digit).is_some() {
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if chars.next_if(|&c| matches!(c, 'e' | 'E')).is_some() {
        chars.next_if(|&c| matches!(c, '+' | '-'));
        let mut exponent_digits = 0;
        while chars.next_if(char::is_ascii_digit).is_some() {
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return false;
        }
    }

    chars.next().is_none()
}

/// ECMAScript `WhiteSpace` and `LineTerminator` code points.
///
/// Narrower than `char::is_whitespace`, which also matches U+0085 (NEL).
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{000B}' | '\u{000C}' | ' ' | '\u{00A0}' | '\u{FEFF}'
            | '\n' | '\r' | '\u{2028}' | '\u{2029}'
            | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}
