use crate::model::{Dict, RegExp, Value};
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

/// Options for [`deep_copy_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyOptions {
    /// `{key}` placeholders in strings are replaced by the mapped value
    pub replace: Option<BTreeMap<String, String>>,
    /// Turn `{pattern, flags}` / `{pattern}` mappings into regular expressions
    #[serde(alias = "detectRegExp")]
    pub detect_regexp: bool,
}

impl CopyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replace<K, V>(mut self, replace: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.replace = Some(
            replace
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn detect_regexp(mut self, detect: bool) -> Self {
        self.detect_regexp = detect;
        self
    }
}

/// Copy `value` without templating or regex detection
pub fn deep_copy(value: &Value) -> Value {
    deep_copy_with(value, &CopyOptions::default())
}

/// Copy `value`, applying `options` to every string and mapping
///
/// Every sequence and mapping of the result is freshly allocated. The walk
/// keeps its own stack, so nesting depth is bounded by memory only.
pub fn deep_copy_with(value: &Value, options: &CopyOptions) -> Value {
    let mut stack = Vec::new();
    if let Some(leaf) = enter(value, options, &mut stack) {
        return leaf;
    }

    while let Some(top) = stack.last_mut() {
        let child = match top {
            Frame::Seq { items, .. } => items.next(),
            Frame::Map { entries, key, .. } => entries.next().map(|(k, v)| {
                *key = k.clone();
                v
            }),
        };
        let copied = match child {
            Some(child) => match enter(child, options, &mut stack) {
                Some(leaf) => leaf,
                None => continue,
            },
            None => match stack.pop() {
                Some(frame) => frame.finish(),
                None => break,
            },
        };
        match stack.last_mut() {
            None => return copied,
            Some(Frame::Seq { out, .. }) => out.push(copied),
            Some(Frame::Map { out, key, .. }) => {
                out.insert(std::mem::take(key), copied);
            }
        }
    }
    // the root frame always returns above
    Value::Undefined
}

/// A container being copied: the source entries left to visit and the
/// copies made so far.
enum Frame<'a> {
    Seq {
        items: std::slice::Iter<'a, Value>,
        out: Vec<Value>,
    },
    Map {
        entries: btree_map::Iter<'a, String, Value>,
        out: Dict,
        /// key of the entry currently being copied
        key: String,
    },
}

impl Frame<'_> {
    fn finish(self) -> Value {
        match self {
            Frame::Seq { out, .. } => Value::Array(out),
            Frame::Map { out, .. } => Value::Object(out),
        }
    }
}

/// Copy a leaf, or open a frame for a container and return `None`.
fn enter<'a>(
    value: &'a Value,
    options: &CopyOptions,
    stack: &mut Vec<Frame<'a>>,
) -> Option<Value> {
    match value {
        Value::String(s) => Some(match &options.replace {
            Some(replace) => Value::String(apply_replacements(s, replace)),
            None => value.clone(),
        }),
        Value::Array(items) => {
            stack.push(Frame::Seq {
                items: items.iter(),
                out: Vec::with_capacity(items.len()),
            });
            None
        }
        Value::Object(map) => {
            if options.detect_regexp {
                if let Some(re) = regexp_from_descriptor(map) {
                    return Some(Value::RegExp(re));
                }
            }
            stack.push(Frame::Map {
                entries: map.iter(),
                out: Dict::new(),
                key: String::new(),
            });
            None
        }
        // numbers, booleans, null, absent, dates, regexps and errors are atomic
        _ => Some(value.clone()),
    }
}

/// Replace the first `{key}` of each key, one key after the other.
fn apply_replacements(s: &str, replace: &BTreeMap<String, String>) -> String {
    replace.iter().fold(s.to_string(), |acc, (key, with)| {
        let placeholder = format!("{{{}}}", key);
        acc.replacen(&placeholder, with, 1)
    })
}

/// Build a regular expression from a descriptor mapping
///
/// Accepts exactly `{pattern, flags}` or exactly `{pattern}`, all strings.
/// Descriptors that fail to compile yield `None`.
fn regexp_from_descriptor(map: &Dict) -> Option<RegExp> {
    let pattern = map.get("pattern")?.as_str()?;
    let flags = match map.len() {
        1 => "",
        2 => map.get("flags")?.as_str()?,
        _ => return None,
    };
    match RegExp::with_flags(pattern, flags) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(pattern, flags, error = %err, "regex descriptor does not compile");
            None
        }
    }
}

/// Interpret `value` as a regular expression
///
/// A regular expression is returned as is; a `{pattern, flags}` or
/// `{pattern}` mapping is compiled; anything else is `None`.
pub fn as_regexp(value: &Value) -> Option<RegExp> {
    match value {
        Value::RegExp(re) => Some(re.clone()),
        Value::Object(map) => regexp_from_descriptor(map),
        _ => None,
    }
}
