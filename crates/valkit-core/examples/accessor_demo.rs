//! Accessor and Structural Engine Demonstration
//!
//! Key concepts illustrated:
//! 1. Accumulating paths and resetting them
//! 2. Throwing versus lenient reads
//! 3. In-place writes through a mutable accessor
//! 4. Templated deep copy with regex re-hydration
//! 5. Deep equality with unset members
#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use valkit_core::{accessor, deep_copy_with, deep_equals, is_type, CopyOptions, Value, UNDEFINED};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== valkit Accessor Demo ===\n");

    // ===== Part 1: Reading =====
    println!("## Part 1: Reading nested values\n");

    let config = Value::from(json!({
        "server": {"host": "localhost", "ports": [8080, 8443]},
        "paths": {"root": "{home}/srv", "match": {"pattern": "\\.log$", "flags": "i"}}
    }));

    let host = accessor(&config).prop("server").prop("host");
    println!("server.host = {}", host.value()?.unwrap_or(&UNDEFINED));

    let tls = accessor(&config).prop("server.ports[1]");
    println!("server.ports[1] = {}", tls.value()?.unwrap_or(&UNDEFINED));
    println!("is integer: {}", tls.is_integer()?);

    let missing = accessor(&config).src("config").throw(true).prop("server.user");
    match missing.value() {
        Ok(found) => println!("unexpected: {:?}", found),
        Err(err) => println!("throwing read: {}", err),
    }

    // ===== Part 2: Writing =====
    println!("\n## Part 2: Writing\n");

    let mut doc = config.clone();
    let acc = accessor(&mut doc)
        .prop("server.user.name")
        .set_val("admin")
        .reset()
        .prop("server.user.name");
    println!("server.user.name = {}", acc.value()?.unwrap_or(&UNDEFINED));

    // ===== Part 3: Copy and compare =====
    println!("\n## Part 3: Copy and compare\n");

    let options = CopyOptions::new()
        .with_replace([("home", "/home/demo")])
        .detect_regexp(true);
    let copied = deep_copy_with(&config, &options);
    let root = accessor(&copied).prop("paths.root");
    println!("paths.root = {}", root.value()?.unwrap_or(&UNDEFINED));
    println!(
        "paths.match is a regexp: {}",
        accessor(&copied).prop("paths.match").is_regexp()?
    );
    println!("copy equals source: {}", deep_equals(&config, &copied));
    println!(
        "null equals {{}}: {}",
        deep_equals(&Value::Null, &Value::from(json!({})))
    );
    println!(
        "8080 is string|number: {}",
        is_type(&Value::from(8080), &["string|number"])?
    );

    Ok(())
}
