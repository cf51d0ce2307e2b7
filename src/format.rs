//! Conversion between numbers and display text.
//!
//! The display always holds text. Numbers are rendered the way a browser
//! stringifies them so that results such as `0.1 + 0.2` or `1 / 0` look the
//! same as on any web calculator.

use crate::error::CalcError;

/// Upper bound on fractional digits for [`format_fixed`].
pub const MAX_FIXED_DIGITS: usize = 100;

/// Render a number as display text.
///
/// Non-finite values become `NaN`, `Infinity` or `-Infinity`. Negative zero
/// renders as `0`. Very large and very small magnitudes use exponent form
/// with an explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }

    format!("{}", value)
}

/// Render a number with exactly `digits` fractional digits.
///
/// `digits` is clamped to [`MAX_FIXED_DIGITS`]. Non-finite values and
/// magnitudes of `1e21` or more fall back to [`format_number`].
pub fn format_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return format_number(value);
    }
    // Avoid "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", digits.min(MAX_FIXED_DIGITS), value)
}

/// Parse display text back into a number.
pub fn parse_display(input: &str) -> Result<f64, CalcError> {
    input.parse::<f64>().map_err(|_| CalcError::Parse {
        input: input.to_string(),
    })
}

/// Number of characters after the sign, the integer digits and the decimal point.
///
/// `"12.345"` has three, `"-7"` has none, `"Infinity"` has eight.
pub fn fraction_len(input: &str) -> usize {
    let rest = input.strip_prefix('-').unwrap_or(input);
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    rest.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-20.0), "-20");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_shortest_decimal() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_fixed_digits() {
        assert_eq!(format_fixed(0.09, 2), "0.09");
        assert_eq!(format_fixed(-0.0525, 4), "-0.0525");
        assert_eq!(format_fixed(-0.0, 2), "0.00");
        assert_eq!(format_fixed(f64::INFINITY, 10), "Infinity");
        assert_eq!(format_fixed(1.0, 500).len(), 2 + MAX_FIXED_DIGITS);
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("5."), Ok(5.0));
        assert_eq!(parse_display("-0.25"), Ok(-0.25));
        assert_eq!(parse_display("1e+21"), Ok(1e21));
        assert_eq!(parse_display("Infinity"), Ok(f64::INFINITY));
        assert!(parse_display("NaN").is_ok_and(f64::is_nan));
        assert!(parse_display("-").is_err());
        assert!(parse_display("").is_err());
    }

    #[test]
    fn test_fraction_len() {
        assert_eq!(fraction_len("9"), 0);
        assert_eq!(fraction_len("12.345"), 3);
        assert_eq!(fraction_len("-0.5"), 1);
        assert_eq!(fraction_len("7."), 0);
        assert_eq!(fraction_len("Infinity"), 8);
    }
}
