use crate::errors::{Result, ValkitError};
use crate::model::{Dict, Value};
use crate::path::Path;

/// Label used in not-found messages when the caller gave none.
pub const DEFAULT_SOURCE_LABEL: &str = "object";

/// Parse a segment as a sequence index.
///
/// Only the canonical decimal spelling counts: `"0"` and `"12"` do,
/// `"01"` and `"+1"` do not.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

/// One level down: a key on a mapping or an index on a sequence.
fn child<'v>(current: &'v Value, segment: &str) -> Option<&'v Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Walk `path` from `subject`; `None` as soon as a segment is missing
///
/// An empty path yields `subject` itself, whatever its shape.
pub fn get_value<'v>(subject: &'v Value, path: &Path) -> Option<&'v Value> {
    path.segments()
        .iter()
        .try_fold(subject, |current, segment| child(current, segment))
}

/// Walk `path` from `subject`, failing on a missing segment when asked to
///
/// # Errors
///
/// With `throw_on_missing`, returns [`ValkitError::PropertyNotFound`] naming
/// the full dotted path and `source_label` (default `"object"`).
pub fn get<'v>(
    subject: &'v Value,
    path: &Path,
    throw_on_missing: bool,
    source_label: Option<&str>,
) -> Result<Option<&'v Value>> {
    match get_value(subject, path) {
        Some(found) => Ok(Some(found)),
        None if throw_on_missing => Err(ValkitError::PropertyNotFound {
            path: path.dotted(),
            source_label: source_label.unwrap_or(DEFAULT_SOURCE_LABEL).to_string(),
        }),
        None => {
            tracing::debug!(path = %path, "path not found");
            Ok(None)
        }
    }
}

/// Assign `value` at `path` inside `subject`, creating mappings on the way
///
/// Returns whether the assignment happened. Nothing is written when the
/// path is empty, `subject` is not a mapping, or a step lands on something
/// that is neither a mapping nor an existing sequence element.
pub fn set_value(subject: &mut Value, path: &Path, value: Value) -> bool {
    let Some((last, parents)) = path.segments().split_last() else {
        return false;
    };
    if !matches!(subject, Value::Object(_)) {
        return false;
    }

    let mut current = subject;
    for segment in parents {
        current = match current {
            Value::Object(map) => map
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Dict::new())),
            Value::Array(items) => match parse_index(segment).and_then(|i| items.get_mut(i)) {
                Some(item) => item,
                None => return false,
            },
            _ => return false,
        };
    }

    match current {
        Value::Object(map) => {
            map.insert(last.clone(), value);
            true
        }
        Value::Array(items) => match parse_index(last).and_then(|i| items.get_mut(i)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        },
        _ => false,
    }
}
