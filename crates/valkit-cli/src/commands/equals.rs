//! Equals command
//!
//! Usage: valkit equals <A> <B>

use super::{document, CommandResult};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use valkit_core::{deep_equals, log_op_end, log_op_start};

#[derive(Debug, Args)]
pub struct EqualsArgs {
    /// First JSON document
    pub a: PathBuf,

    /// Second JSON document
    pub b: PathBuf,
}

/// Execute equals command, returning whether the documents are equal
pub fn execute(args: EqualsArgs) -> CommandResult<bool> {
    let start = Instant::now();
    log_op_start!("cli_equals");

    let a = document::read_document(&args.a)?;
    let b = document::read_document(&args.b)?;
    let equal = deep_equals(&a, &b);
    println!("{}", equal);

    log_op_end!(
        "cli_equals",
        duration_ms = start.elapsed().as_millis() as u64,
        equal = equal
    );
    Ok(equal)
}
