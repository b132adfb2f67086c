//! Core types shared across valkit facilities
//!
//! This crate provides the canonical field keys and event names used by
//! the logging facility and by consumers asserting on captured events.

pub mod schema;
