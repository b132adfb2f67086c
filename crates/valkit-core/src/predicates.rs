//! Type predicates over [`Value`]
//!
//! Every predicate is total: it answers `false` rather than failing for
//! absent, null or otherwise unexpected input.

use crate::model::Value;
use regex::Regex;
use std::sync::LazyLock;

static TRUE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^true$").expect("true pattern is valid"));
static FALSE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^false$").expect("false pattern is valid"));

pub fn is_boolean(val: &Value) -> bool {
    matches!(val, Value::Bool(_))
}

pub fn is_string(val: &Value) -> bool {
    matches!(val, Value::String(_))
}

pub fn is_non_empty_string(val: &Value) -> bool {
    matches!(val, Value::String(s) if !s.is_empty())
}

/// A number that is not `NaN`
pub fn is_number(val: &Value) -> bool {
    matches!(val, Value::Number(n) if !n.is_nan())
}

/// A number strictly greater than zero
pub fn is_pos_number(val: &Value) -> bool {
    matches!(val, Value::Number(n) if *n > 0.0)
}

/// A finite number without fractional part
pub fn is_integer(val: &Value) -> bool {
    matches!(val, Value::Number(n) if n.is_finite() && n.fract() == 0.0)
}

pub fn is_date(val: &Value) -> bool {
    matches!(val, Value::Date(_))
}

pub fn is_array(val: &Value) -> bool {
    matches!(val, Value::Array(_))
}

pub fn is_non_empty_array(val: &Value) -> bool {
    matches!(val, Value::Array(items) if !items.is_empty())
}

pub fn is_regexp(val: &Value) -> bool {
    matches!(val, Value::RegExp(_))
}

pub fn is_null(val: &Value) -> bool {
    matches!(val, Value::Null)
}

/// Anything but the absent value; `null` is defined
pub fn is_defined(val: &Value) -> bool {
    !matches!(val, Value::Undefined)
}

/// Neither absent nor `null`
pub fn has_value(val: &Value) -> bool {
    !matches!(val, Value::Undefined | Value::Null)
}

/// A mapping with no keys
pub fn is_empty(val: &Value) -> bool {
    matches!(val, Value::Object(map) if map.is_empty())
}

pub fn is_error(val: &Value) -> bool {
    matches!(val, Value::Error(_))
}

/// A mapping: not a sequence, date, regular expression or error
pub fn is_object(val: &Value) -> bool {
    matches!(val, Value::Object(_))
}

/// Alias of [`is_object`]
pub fn is_dict(val: &Value) -> bool {
    is_object(val)
}

/// Membership outside the "unset" class used by deep equality
///
/// Absent, `null`, empty sequences and empty mappings are unset; dates and
/// every other leaf are set.
pub fn is_set(val: &Value) -> bool {
    match val {
        Value::Undefined | Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Date(_) => true,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

/// Numbers are true when positive, strings when non-empty and not
/// `"false"` (any case), booleans are themselves.
pub fn is_true(val: &Value) -> bool {
    match val {
        Value::Number(n) => *n > 0.0,
        Value::String(s) => !s.is_empty() && !FALSE_WORD.is_match(s),
        Value::Bool(b) => *b,
        _ => false,
    }
}

/// Numbers are false when zero, strings when non-empty and not `"true"`
/// (any case). Booleans report themselves, so `is_false(false)` is `false`.
pub fn is_false(val: &Value) -> bool {
    match val {
        Value::Number(n) => *n == 0.0,
        Value::String(s) => !s.is_empty() && !TRUE_WORD.is_match(s),
        Value::Bool(b) => *b,
        _ => false,
    }
}
