//! Numeric and string coercion helpers
//!
//! Lenient conversions that never fail: unusable input yields `0`, `NaN` or
//! the input unchanged, as documented per function.

use crate::model::Value;
use regex::Regex;
use std::sync::LazyLock;

/// Decimal places used by [`round_number`] callers that have no preference.
pub const DEFAULT_ROUND_DECIMALS: i32 = 3;

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("float prefix pattern is valid")
});

/// Round half up (towards positive infinity), as `Math.round` does.
pub fn js_round(n: f64) -> f64 {
    if !n.is_finite() {
        return n;
    }
    let floor = n.floor();
    if n - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Render a number the way string conversion of a number reads:
/// `32` rather than `32.0`, `NaN`, `Infinity`.
///
/// Magnitudes from `1e21` up and below `1e-6` use exponent form with an
/// explicit sign, `1e+21` and `1e-7`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        format!("{}", n)
    }
}

/// Parse the longest leading float literal of `s`; `NaN` when there is none.
pub fn parse_float_prefix(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let Some(m) = FLOAT_PREFIX.find(trimmed) else {
        return f64::NAN;
    };
    let literal = m.as_str();
    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}

/// Numbers pass through, non-empty strings are parsed by their leading
/// float literal (`NaN` if none), everything else is `0`.
pub fn as_float(val: &Value) -> f64 {
    match val {
        Value::Number(n) => *n,
        Value::String(s) if !s.is_empty() => parse_float_prefix(s),
        _ => 0.0,
    }
}

/// Like [`as_float`] followed by half-up rounding; `NaN` becomes `0`.
pub fn as_int(val: &Value) -> i64 {
    let n = match val {
        Value::Number(n) => *n,
        Value::String(s) if !s.is_empty() => parse_float_prefix(s),
        _ => return 0,
    };
    if n.is_nan() {
        return 0;
    }
    // saturating cast
    js_round(n) as i64
}

/// Left-pad the string form of `n` to `width` with `fill` (default `"0"`).
///
/// The fill is repeated once per missing character, so a multi-character
/// fill produces a longer result. Numbers already `width` wide are returned
/// unchanged.
pub fn pad(n: f64, width: usize, fill: Option<&str>) -> String {
    let fill = match fill {
        Some(z) if !z.is_empty() => z,
        _ => "0",
    };
    let sn = number_to_string(n);
    let len = sn.chars().count();
    if len >= width {
        return sn;
    }
    let mut padded = fill.repeat(width - len);
    padded.push_str(&sn);
    padded
}

/// Round `num` to `dec` digits after the decimal point.
pub fn round_number(num: f64, dec: i32) -> f64 {
    let factor = 10f64.powi(dec);
    js_round(num * factor) / factor
}

/// `myStringHere` and `MyStringHere` both become `my-string-here`.
///
/// Only ASCII capitals are treated as word boundaries.
pub fn camel_to_dash(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_round_halves_go_up() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(9.49), 9.0);
        assert_eq!(js_round(0.49999999999999994), 0.0);
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(32.0), "32");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1.5), "1.5");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_number_to_string_exponent_range() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(-2e22), "-2e+22");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(1.5e-8), "1.5e-8");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(1e-6), "0.000001");
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("11.5"), 11.5);
        assert_eq!(parse_float_prefix("  3px"), 3.0);
        assert_eq!(parse_float_prefix(".5e1x"), 5.0);
        assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float_prefix("aba").is_nan());
    }

    #[test]
    fn test_camel_to_dash_single_word() {
        assert_eq!(camel_to_dash("word"), "word");
        assert_eq!(camel_to_dash("Word"), "word");
        assert_eq!(camel_to_dash(""), "");
    }
}
