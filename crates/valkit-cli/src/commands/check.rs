//! Check command
//!
//! Usage: valkit check <FILE> <TYPE>... [--path <PATH>] [--throw]

use super::{document, CommandResult};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use valkit_core::{accessor, log_op_end, log_op_start, PathFragment};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON document to read
    pub file: PathBuf,

    /// Type names (`string`, `number|null`, ...)
    #[arg(required = true)]
    pub types: Vec<String>,

    /// Check the value at this path instead of the whole document
    #[arg(short, long)]
    pub path: Option<String>,

    /// Fail when the path does not resolve
    #[arg(long)]
    pub throw: bool,
}

/// Execute check command
pub fn execute(args: CheckArgs) -> CommandResult {
    let start = Instant::now();
    log_op_start!("cli_check", file = %args.file.display());

    let doc = document::read_document(&args.file)?;
    let fragment = args
        .path
        .as_deref()
        .map_or(PathFragment::Ignored, PathFragment::from);
    let matched = accessor(&doc)
        .throw(args.throw)
        .prop(fragment)
        .is_type(args.types.as_slice())?;
    println!("{}", matched);

    log_op_end!(
        "cli_check",
        duration_ms = start.elapsed().as_millis() as u64,
        matched = matched
    );
    Ok(())
}
