//! Field selection and error assembly

use crate::model::{Dict, Value};

/// Copy the listed keys whose value is not absent
pub fn pick<K: AsRef<str>>(obj: &Dict, keys: &[K]) -> Dict {
    keys.iter()
        .filter_map(|key| {
            let key = key.as_ref();
            obj.get(key)
                .filter(|v| !v.is_undefined())
                .map(|v| (key.to_string(), v.clone()))
        })
        .collect()
}

/// Copy every key except the listed ones
pub fn omit<K: AsRef<str>>(obj: &Dict, keys: &[K]) -> Dict {
    obj.iter()
        .filter(|(k, _)| !keys.iter().any(|key| key.as_ref() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Combine arguments into one error value
///
/// The message joins one part per argument with a space: strings
/// contribute themselves, error arguments contribute the message of the
/// first error seen, anything else its display form. `None` without
/// arguments.
pub fn as_error(args: &[Value]) -> Option<Value> {
    if args.is_empty() {
        return None;
    }

    let mut first_error: Option<&str> = None;
    let parts: Vec<String> = args
        .iter()
        .map(|arg| match arg {
            Value::Error(message) => first_error.get_or_insert(message.as_str()).to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    Some(Value::Error(parts.join(" ")))
}
