//! Structural engine: deep copy and deep equality over [`Value`] graphs
//!
//! Both walks keep an explicit work stack instead of recursing, so any
//! nesting depth is handled.
//!
//! [`Value`]: crate::model::Value

pub mod copy;
pub mod equals;

pub use copy::{as_regexp, deep_copy, deep_copy_with, CopyOptions};
pub use equals::deep_equals;
