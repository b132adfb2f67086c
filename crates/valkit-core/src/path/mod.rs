//! Nested path resolution
//!
//! [`Path`] normalizes heterogeneous path fragments into string segments;
//! [`get`] and [`set_value`] walk a [`Value`](crate::model::Value) by those
//! segments.

pub mod access;
pub mod resolver;

pub use access::{get, get_value, set_value, DEFAULT_SOURCE_LABEL};
pub use resolver::{Path, PathFragment};
