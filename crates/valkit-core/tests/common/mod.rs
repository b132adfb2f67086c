use valkit_core::{Dict, RegExp, Value};

/// Build a [`Value`] from a `json!` literal
#[allow(dead_code)]
pub fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Build a [`Dict`] from a `json!` object literal
///
/// Panics if the literal is not an object.
#[allow(dead_code)]
pub fn dict(json: serde_json::Value) -> Dict {
    match Value::from(json) {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other.kind_name()),
    }
}

/// Compile a regular expression value for fixtures
#[allow(dead_code)]
pub fn re(pattern: &str, flags: &str) -> Value {
    Value::RegExp(RegExp::with_flags(pattern, flags).unwrap())
}

/// The templated fixture used by the deep copy tests
#[allow(dead_code)]
pub fn templated_fixture() -> Value {
    v(serde_json::json!({
        "a": "b",
        "c": "{home}/hello/world",
        "e": 4,
        "f": [{"a": "{home}/hello/world"}],
        "g": {"pattern": "serial$", "flags": "i"},
        "h": {"pattern": "(a|bc)"}
    }))
}
