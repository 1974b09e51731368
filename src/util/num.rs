use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Magnitude from which results are printed in exponent notation.
pub const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitude below which non-zero results are printed in exponent notation.
pub const EXPONENT_BELOW: f64 = 1e-6;

/// Parses the text of a number literal.
///
/// Accepts the forms the lexer produces: digits with an optional dot,
/// including a leading dot (`.5`) or a trailing dot (`5.`). A literal that
/// opens with a dot may carry a second dot (`.5.3`); like a calculator
/// reading the longest valid prefix, everything from the second dot on is
/// ignored.
///
/// ## Errors
/// Returns `EvalError::InvalidNumber` if `literal` contains anything but
/// digits and dots, or if its valid prefix has no digit.
///
/// ## Example
/// ```
/// use calcengine::util::num::parse_literal;
///
/// assert_eq!(parse_literal(".5").unwrap(), 0.5);
/// assert_eq!(parse_literal("5.").unwrap(), 5.0);
/// assert_eq!(parse_literal(".5.3").unwrap(), 0.5);
/// assert!(parse_literal("1e5").is_err());
/// ```
pub fn parse_literal(literal: &str) -> EvalResult<f64> {
    let invalid = || EvalError::InvalidNumber { literal: literal.to_string() };

    if !literal.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalid());
    }

    let prefix = match literal.match_indices('.').nth(1) {
        Some((second_dot, _)) => &literal[..second_dot],
        None => literal,
    };

    if !prefix.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    prefix.parse().map_err(|_| invalid())
}

/// Formats a result for display.
///
/// Integral values print without a fractional part, NaN prints as `NaN` and
/// infinities as `Infinity` / `-Infinity`. Very large and very small
/// magnitudes use exponent notation with a signed exponent (`1e+21`,
/// `2.5e-7`); everything else uses the shortest decimal representation that
/// round-trips.
///
/// ## Example
/// ```
/// use calcengine::util::num::format_result;
///
/// assert_eq!(format_result(-33.0), "-33");
/// assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_result(1.0 / 0.0), "Infinity");
/// assert_eq!(format_result(1e21), "1e+21");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() >= EXPONENT_ABOVE || value.abs() < EXPONENT_BELOW {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
            _ => text,
        };
    }
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    value.to_string()
}
