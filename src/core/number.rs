//! Conversion between display text and numbers.
//!
//! Parsing is permissive: the longest numeric prefix wins and trailing
//! garbage is ignored. Formatting prints integral values without a fraction
//! and switches to exponent form for very large or very small magnitudes.

const INFINITY: &str = "Infinity";
const NAN: &str = "NaN";

/// Parse display text as a number.
///
/// Accepts an optional sign, digits with at most one decimal point and an
/// optional exponent. Text after the numeric prefix is ignored, so
/// `"1.2.3"` reads as `1.2`. Text with no leading digits yields `NaN`.
///
/// # Example
///
/// ```rust
/// use tapcalc::core::number::parse;
///
/// assert_eq!(parse("12.5"), 12.5);
/// assert_eq!(parse("-3"), -3.0);
/// assert_eq!(parse("1.2.3"), 1.2);
/// assert!(parse("Error").is_nan());
/// ```
pub fn parse(text: &str) -> f64 {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    if rest.starts_with(INFINITY) {
        return sign * f64::INFINITY;
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut digits = 0;
    let mut seen_point = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }

    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    // Only ASCII bytes were scanned, so `end` is a char boundary.
    rest[..end]
        .parse::<f64>()
        .map(|value| sign * value)
        .unwrap_or(f64::NAN)
}

/// Format a number for the display.
///
/// # Example
///
/// ```rust
/// use tapcalc::core::number::stringify;
///
/// assert_eq!(stringify(8.0), "8");
/// assert_eq!(stringify(-0.0), "0");
/// assert_eq!(stringify(0.125), "0.125");
/// assert_eq!(stringify(1e21), "1e+21");
/// assert_eq!(stringify(f64::INFINITY), "Infinity");
/// ```
pub fn stringify(value: f64) -> String {
    if value.is_nan() {
        return NAN.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY.to_string()
        } else {
            format!("-{INFINITY}")
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }

    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_literals() {
        assert_eq!(parse("0"), 0.0);
        assert_eq!(parse("42"), 42.0);
        assert_eq!(parse("12.5"), 12.5);
        assert_eq!(parse("-3"), -3.0);
    }

    #[test]
    fn parses_dangling_points() {
        assert_eq!(parse("5."), 5.0);
        assert_eq!(parse(".5"), 0.5);
        assert_eq!(parse("-.25"), -0.25);
        assert!(parse(".").is_nan());
    }

    #[test]
    fn ignores_trailing_garbage() {
        assert_eq!(parse("1.2.3"), 1.2);
        assert_eq!(parse("7abc"), 7.0);
        assert_eq!(parse("  9"), 9.0);
    }

    #[test]
    fn parses_exponents_only_when_complete() {
        assert_eq!(parse("1e+21"), 1e21);
        assert_eq!(parse("1.5e-7"), 1.5e-7);
        assert_eq!(parse("3e"), 3.0);
        assert_eq!(parse("3e+"), 3.0);
    }

    #[test]
    fn parses_non_finite_text() {
        assert_eq!(parse("Infinity"), f64::INFINITY);
        assert_eq!(parse("-Infinity"), f64::NEG_INFINITY);
        assert!(parse("NaN").is_nan());
        assert!(parse("").is_nan());
        assert!(parse("Error").is_nan());
    }

    #[test]
    fn stringifies_integers_without_fraction() {
        assert_eq!(stringify(8.0), "8");
        assert_eq!(stringify(-3.0), "-3");
        assert_eq!(stringify(20.0), "20");
    }

    #[test]
    fn stringify_normalizes_negative_zero() {
        assert_eq!(stringify(-0.0), "0");
        assert_eq!(stringify(0.0 * -1.0), "0");
    }

    #[test]
    fn stringify_keeps_binary_rounding() {
        assert_eq!(stringify(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(stringify(0.05), "0.05");
    }

    #[test]
    fn stringify_uses_exponent_form_at_the_extremes() {
        assert_eq!(stringify(1e21), "1e+21");
        assert_eq!(stringify(1e20), "100000000000000000000");
        assert_eq!(stringify(1.5e-7), "1.5e-7");
        assert_eq!(stringify(0.000001), "0.000001");
    }

    #[test]
    fn stringify_renders_non_finite_values() {
        assert_eq!(stringify(f64::INFINITY), "Infinity");
        assert_eq!(stringify(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(stringify(f64::NAN), "NaN");
    }

    #[test]
    fn non_finite_text_survives_a_round_trip() {
        assert_eq!(parse(&stringify(f64::INFINITY)), f64::INFINITY);
        assert_eq!(parse(&stringify(f64::NEG_INFINITY)), f64::NEG_INFINITY);
    }
}
