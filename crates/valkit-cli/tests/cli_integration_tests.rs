//! CLI integration tests
//!
//! These tests drive the `valkit` binary against JSON documents written to a
//! temporary directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_json(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_valkit"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_cli_get_nested_value() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_json(&temp_dir, "doc.json", r#"{"a": {"b": [10, 20]}}"#);

    let output = run(&["get", doc.to_str().unwrap(), "a", "b[1]"]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout(&output), "20");
}

#[test]
fn test_cli_get_missing_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_json(&temp_dir, "doc.json", r#"{"a": 1}"#);

    let output = run(&["get", doc.to_str().unwrap(), "a.c"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_cli_get_missing_with_throw_fails() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_json(&temp_dir, "doc.json", r#"{"a": {"b": 3}}"#);

    let output = run(&["get", doc.to_str().unwrap(), "a.c", "--throw", "--src", "config"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Property a.c not found in config"),
        "Unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_cli_set_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_json(&temp_dir, "doc.json", r#"{"a": 1}"#);
    let out = temp_dir.path().join("out.json");

    let output = run(&[
        "set",
        doc.to_str().unwrap(),
        "x.y",
        r#"{"z": true}"#,
        "--output",
        out.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({"a": 1, "x": {"y": {"z": true}}})
    );
}

#[test]
fn test_cli_equals_ignores_unset_members() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_json(&temp_dir, "a.json", r#"{"a": 1, "b": [], "c": null}"#);
    let b = write_json(&temp_dir, "b.json", r#"{"a": 1, "b": {}, "c": []}"#);
    let c = write_json(&temp_dir, "c.json", r#"{"a": 2, "b": {}, "c": []}"#);

    let same = run(&["equals", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(same.status.success());
    assert_eq!(stdout(&same), "true");

    let different = run(&["equals", a.to_str().unwrap(), c.to_str().unwrap()]);
    assert_eq!(different.status.code(), Some(1));
    assert_eq!(stdout(&different), "false");
}

#[test]
fn test_cli_copy_with_replacements_and_regexp() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_json(
        &temp_dir,
        "doc.json",
        r#"{"c": "{home}/x", "g": {"pattern": "serial$", "flags": "i"}}"#,
    );

    let output = run(&[
        "copy",
        doc.to_str().unwrap(),
        "--replace",
        "home=well",
        "--detect-regexp",
    ]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let copied: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(copied["c"], "well/x");
    assert_eq!(copied["g"]["pattern"], "serial$");
    assert_eq!(copied["g"]["flags"], "i");
}

#[test]
fn test_cli_copy_reads_options_file() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_json(&temp_dir, "doc.json", r#"{"c": "{home}/{home}"}"#);
    let options = write_json(
        &temp_dir,
        "options.json",
        r#"{"replace": {"home": "well"}, "detectRegExp": true}"#,
    );

    let output = run(&[
        "copy",
        doc.to_str().unwrap(),
        "--options",
        options.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let copied: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(copied["c"], "well/{home}");
}

#[test]
fn test_cli_check_types() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_json(&temp_dir, "doc.json", r#"{"a": {"count": 4}}"#);

    let output = run(&[
        "check",
        doc.to_str().unwrap(),
        "string|integer",
        "--path",
        "a.count",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true");

    let whole = run(&["check", doc.to_str().unwrap(), "array"]);
    assert!(whole.status.success());
    assert_eq!(stdout(&whole), "false");
}

#[test]
fn test_cli_check_unknown_type_fails() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_json(&temp_dir, "doc.json", "34");

    let output = run(&["check", doc.to_str().unwrap(), "xxx,yyy"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid type [xxx,yyy]"));
}

#[test]
fn test_cli_rejects_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_json(&temp_dir, "doc.json", "{not json");

    let output = run(&["get", doc.to_str().unwrap(), "a"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Serialization error"));
}
