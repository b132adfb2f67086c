//! valkit core - runtime type checks and object utilities over dynamic values
//!
//! This crate provides:
//! - The [`Value`] model (JSON values plus absent, dates, regular expressions and errors)
//! - Total type predicates and tag-based type checks ([`is_type`])
//! - Path resolution and the fluent [`Accessor`] for nested reads and writes
//! - Deep copy with string templating and regex re-hydration
//! - Deep equality with an "unset" equivalence class
//! - Lenient numeric and string coercion, field selection
//!
//! ```
//! use valkit_core::{accessor, deep_equals, Value};
//! use serde_json::json;
//!
//! let subject = Value::from(json!({"a": {"b": 3}}));
//! let b = accessor(&subject).prop("a").prop("b");
//! assert_eq!(b.value().unwrap(), Some(&Value::from(3)));
//! assert!(deep_equals(&Value::Null, &Value::from(json!({}))));
//! ```

pub mod accessor;
pub mod coerce;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod path;
pub mod predicates;
pub mod select;
pub mod structural;
pub mod val_type;

// Re-export commonly used types
pub use accessor::{accessor, Accessor, AccessorOptions};
pub use errors::{ExError, ExErrorKind, Result, ValkitError};
pub use model::{Dict, RegExp, Value, UNDEFINED};
pub use path::{Path, PathFragment};
pub use select::{as_error, omit, pick};
pub use structural::{as_regexp, deep_copy, deep_copy_with, deep_equals, CopyOptions};
pub use val_type::{is_type, ValType};
