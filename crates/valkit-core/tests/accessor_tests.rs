//! Accessor tests
//!
//! Fluent path building, reads, writes and type checks through `accessor`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::v;
use serde_json::json;
use valkit_core::{accessor, Accessor, AccessorOptions, PathFragment, ValkitError, Value};

#[test]
fn test_value_through_dotted_property() {
    let subject = v(json!({"a": {"b": 3}}));
    let acc = accessor(&subject).property("a.b");
    assert_eq!(acc.value().unwrap(), Some(&Value::from(3)));
}

#[test]
fn test_value_accumulates_across_calls() {
    let subject = v(json!({"a": {"b": 3}}));
    let acc = accessor(&subject).property("a").prop("b");
    assert_eq!(acc.value().unwrap(), Some(&Value::from(3)));
}

#[test]
fn test_reset_clears_accumulated_path() {
    let subject = v(json!({"a": {"b": 3}}));
    let acc = accessor(&subject).property("a").reset().prop("a.b");
    assert_eq!(acc.val().unwrap(), Some(&Value::from(3)));
}

#[test]
fn test_set_val_then_read_back() {
    let mut subject = v(json!({"a": {"b": 3}}));
    let acc = accessor(&mut subject)
        .prop("a.b")
        .set_val(5)
        .property("a")
        .reset()
        .prop("a.b");
    assert_eq!(acc.value().unwrap(), Some(&Value::from(5)));
}

#[test]
fn test_set_val_creates_intermediate_mappings() {
    let mut subject = v(json!({}));
    accessor(&mut subject).prop("x.y[0]").set_val("deep");
    assert_eq!(subject, v(json!({"x": {"y": {"0": "deep"}}})));
}

#[test]
fn test_set_value_into_other_subject() {
    let template = v(json!({}));
    let acc = accessor(&template).prop(["a", "b"]);

    let mut target = v(json!({"a": 1}));
    assert!(!acc.set_value(&mut target, 2));

    let mut target = v(json!({"z": 1}));
    assert!(acc.set_value(&mut target, 2));
    assert_eq!(target, v(json!({"z": 1, "a": {"b": 2}})));
}

#[test]
fn test_set_val_on_non_mapping_subject_is_noop() {
    let mut subject = v(json!([1, 2]));
    accessor(&mut subject).prop("0").set_val(9);
    assert_eq!(subject, v(json!([1, 2])));
}

#[test]
fn test_empty_path_resolves_subject() {
    let subject = Value::from(42);
    assert_eq!(accessor(&subject).value().unwrap(), Some(&subject));
}

#[test]
fn test_missing_path_without_throw_is_none() {
    let subject = v(json!({"a": {"b": "string"}}));
    let acc = accessor(&subject).property("a.c");
    assert_eq!(acc.value().unwrap(), None);
    assert!(!acc.is_string().unwrap());
    assert!(!acc.is_defined().unwrap());
}

#[test]
fn test_throw_names_full_path_and_default_label() {
    let subject = v(json!({"a": {"b": 3}}));
    let err = accessor(&subject)
        .throw(true)
        .property("a.c")
        .is_type(&["string|number"])
        .unwrap_err();
    assert_eq!(err.to_string(), "Property a.c not found in object");
}

#[test]
fn test_throw_uses_configured_label() {
    let subject = v(json!({"a": {"b": 3}}));
    let options = AccessorOptions {
        throw: true,
        src: Some("test".to_string()),
    };
    let err = Accessor::with_options(&subject, options)
        .property("a.c")
        .value()
        .unwrap_err();
    assert_eq!(
        err,
        ValkitError::PropertyNotFound {
            path: "a.c".to_string(),
            source_label: "test".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Property a.c not found in test");
}

#[test]
fn test_throw_can_be_toggled_off_again() {
    let subject = v(json!({"a": 1}));
    let acc = accessor(&subject).src("cfg").throw(true).throw(false).prop("b");
    assert_eq!(acc.value().unwrap(), None);
    assert_eq!(acc.options().src.as_deref(), Some("cfg"));
}

#[test]
fn test_is_type_on_property() {
    let subject = v(json!({"a": 3}));
    assert!(accessor(&subject).property("a").is_type(&["number"]).unwrap());
    assert!(!accessor(&subject).property("a").is_type(&["string"]).unwrap());

    let nested = v(json!({"a": {"b": 3}}));
    assert!(accessor(&nested)
        .property("a.b")
        .is_type(&["string|number"])
        .unwrap());
}

#[test]
fn test_predicates_on_property() {
    let subject = v(json!({
        "s": "string",
        "n": 4,
        "list": [1],
        "empty": {},
        "nil": null
    }));
    let at = |key: &str| accessor(&subject).prop(key);

    assert!(at("s").is_string().unwrap());
    assert!(at("s").is_non_empty_string().unwrap());
    assert!(at("n").is_integer().unwrap());
    assert!(at("n").is_pos_number().unwrap());
    assert!(at("list").is_non_empty_array().unwrap());
    assert!(at("empty").is_empty().unwrap());
    assert!(at("empty").is_dict().unwrap());
    assert!(at("nil").is_null().unwrap());
    assert!(!at("nil").has_value().unwrap());
    assert!(at("nil").is_defined().unwrap());
}

#[test]
fn test_check_with_custom_predicate() {
    let subject = v(json!({"port": 8080}));
    let in_range = accessor(&subject)
        .prop("port")
        .check(|val| val.as_f64().is_some_and(|n| n < 65536.0))
        .unwrap();
    assert!(in_range);
}

#[test]
fn test_bracket_index_reads_sequence_element() {
    let subject = v(json!({"list": [{"name": "x"}, {"name": "y"}]}));
    let acc = accessor(&subject).prop("list[1].name");
    assert_eq!(acc.value().unwrap(), Some(&Value::from("y")));
}

#[test]
fn test_value_fragments_are_accepted() {
    let subject = v(json!({"a": {"b": [10, 20]}}));
    let fragment = v(json!(["a", "b", 1]));
    let acc = accessor(&subject)
        .prop(&fragment)
        .prop(&Value::Null)
        .prop(PathFragment::Ignored);
    assert_eq!(acc.value().unwrap(), Some(&Value::from(20)));
}
