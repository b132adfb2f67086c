//! Get command
//!
//! Usage: valkit get <FILE> <PATH>... [--throw] [--src <LABEL>]

use super::{document, CommandResult};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use valkit_core::{log_op_end, log_op_start, Accessor, AccessorOptions};

#[derive(Debug, Args)]
pub struct GetArgs {
    /// JSON document to read
    pub file: PathBuf,

    /// Path fragments (`a.b`, `list[0].name`), appended in order
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Fail when the path does not resolve
    #[arg(long)]
    pub throw: bool,

    /// Label of the document in not-found messages
    #[arg(long)]
    pub src: Option<String>,
}

/// Execute get command
pub fn execute(args: GetArgs) -> CommandResult {
    let start = Instant::now();
    log_op_start!("cli_get", file = %args.file.display());

    let doc = document::read_document(&args.file)?;
    let options = AccessorOptions {
        throw: args.throw,
        src: args.src,
    };
    let acc = Accessor::with_options(&doc, options).get(&args.paths);

    if let Some(found) = acc.value()? {
        document::emit(found, None)?;
    }

    log_op_end!("cli_get", duration_ms = start.elapsed().as_millis() as u64);
    Ok(())
}
