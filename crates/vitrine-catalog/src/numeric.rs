//! Lenient numeric coercion for feed values.
//!
//! Feed cells are operator-typed, so numbers are read by prefix: the longest
//! leading run that forms a number is used and anything after it is ignored.
//! A cell with no numeric prefix yields `None`; callers choose the fallback.

/// Parse the longest leading integer prefix (`[+-]?[0-9]+`).
///
/// Leading whitespace is skipped. Values that do not fit in an `i64` saturate.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = split_sign(s);

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the longest leading decimal prefix
/// (`[+-]?digits[.digits][(e|E)[+-]digits]`, with at least one mantissa digit).
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Coerce a price cell to a non-negative finite decimal, `0.0` on failure.
pub fn lenient_price(raw: &str) -> f64 {
    match parse_float_prefix(raw) {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  7"), Some(7));
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("1.9"), Some(1));
        assert_eq!(parse_int_prefix("-5"), Some(-5));
        assert_eq!(parse_int_prefix("+3"), Some(3));
    }

    #[test]
    fn test_int_prefix_rejects_non_numeric() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("x"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("abc12"), None);
    }

    #[test]
    fn test_int_prefix_saturates() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(parse_float_prefix("15.50"), Some(15.5));
        assert_eq!(parse_float_prefix("22"), Some(22.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("3."), Some(3.0));
        assert_eq!(parse_float_prefix("10 reais"), Some(10.0));
        assert_eq!(parse_float_prefix("1e2"), Some(100.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("-2.5"), Some(-2.5));
    }

    #[test]
    fn test_float_prefix_rejects_non_numeric() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("R$ 10"), None);
    }

    #[test]
    fn test_lenient_price_fallbacks() {
        assert_eq!(lenient_price("15.50"), 15.5);
        assert_eq!(lenient_price("abc"), 0.0);
        assert_eq!(lenient_price("-4"), 0.0);
        assert_eq!(lenient_price("1e400"), 0.0);
    }
}
