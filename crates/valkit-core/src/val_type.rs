//! Type tags and tag-based type checks
//!
//! [`ValType`] is the closed set of tags accepted by [`is_type`]. Each tag
//! dispatches to one predicate from [`crate::predicates`].

use crate::errors::{Result, ValkitError};
use crate::log_op_error;
use crate::model::Value;
use crate::predicates;
use std::fmt;
use std::str::FromStr;

/// Separators allowed between tags inside one name argument.
const TAG_SEPARATORS: [char; 2] = ['|', ','];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValType {
    String,
    Number,
    Boolean,
    Null,
    Object,
    Array,
    Date,
    /// Anything defined
    Any,
    Integer,
}

impl ValType {
    pub const ALL: [ValType; 9] = [
        ValType::String,
        ValType::Number,
        ValType::Boolean,
        ValType::Null,
        ValType::Object,
        ValType::Array,
        ValType::Date,
        ValType::Any,
        ValType::Integer,
    ];

    /// The tag as written in name lists
    pub fn name(&self) -> &'static str {
        match self {
            ValType::String => "string",
            ValType::Number => "number",
            ValType::Boolean => "boolean",
            ValType::Null => "null",
            ValType::Object => "object",
            ValType::Array => "array",
            ValType::Date => "date",
            ValType::Any => "any",
            ValType::Integer => "integer",
        }
    }

    /// The predicate this tag dispatches to
    pub fn predicate(&self) -> fn(&Value) -> bool {
        match self {
            ValType::String => predicates::is_string,
            ValType::Number => predicates::is_number,
            ValType::Boolean => predicates::is_boolean,
            ValType::Null => predicates::is_null,
            ValType::Object => predicates::is_object,
            ValType::Array => predicates::is_array,
            ValType::Date => predicates::is_date,
            ValType::Any => predicates::is_defined,
            ValType::Integer => predicates::is_integer,
        }
    }

    pub fn matches(&self, val: &Value) -> bool {
        (self.predicate())(val)
    }
}

impl fmt::Display for ValType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValType {
    type Err = ValkitError;

    fn from_str(s: &str) -> Result<Self> {
        ValType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ValkitError::InvalidType {
                names: vec![s.to_string()],
            })
    }
}

/// Split a name list such as `" string,number | boolean"` into its tags.
pub fn split_type_names(names: &str) -> impl Iterator<Item = &str> {
    names
        .split(TAG_SEPARATORS)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// True when `val` matches any of the given tags
pub fn is_any_of(val: &Value, types: &[ValType]) -> bool {
    types.iter().any(|t| t.matches(val))
}

/// Check `val` against type names
///
/// Each entry of `names` may hold several tags separated by `|` or `,`.
/// Returns `Ok(true)` as soon as a known tag matches, even if other tags
/// are unknown.
///
/// # Errors
///
/// Returns [`ValkitError::InvalidType`] listing the unknown tags when no
/// known tag matched and at least one tag was not recognised.
pub fn is_type<S: AsRef<str>>(val: &Value, names: &[S]) -> Result<bool> {
    let mut unknown = Vec::new();
    for name in names.iter().flat_map(|n| split_type_names(n.as_ref())) {
        match name.parse::<ValType>() {
            Ok(t) if t.matches(val) => return Ok(true),
            Ok(_) => {}
            Err(_) => unknown.push(name.to_string()),
        }
    }

    if unknown.is_empty() {
        return Ok(false);
    }

    let err = ValkitError::InvalidType { names: unknown };
    log_op_error!("is_type", err.clone(), duration_ms = 0);
    Err(err)
}
