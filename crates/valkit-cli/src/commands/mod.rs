pub mod check;
pub mod copy;
pub mod document;
pub mod equals;
pub mod get;
pub mod set;

/// Result type shared by every command
pub type CommandResult<T = ()> = Result<T, Box<dyn std::error::Error>>;
