//! Set command
//!
//! Usage: valkit set <FILE> <PATH> <JSON> [--output <FILE>]

use super::{document, CommandResult};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use valkit_core::{log_op_end, log_op_start, path, Path, ValkitError, Value};

#[derive(Debug, Args)]
pub struct SetArgs {
    /// JSON document to update
    pub file: PathBuf,

    /// Dotted path to assign at
    pub path: String,

    /// New value, as JSON (`5`, `"text"`, `{"k": 1}`)
    pub value: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute set command
pub fn execute(args: SetArgs) -> CommandResult {
    let start = Instant::now();
    log_op_start!("cli_set", file = %args.file.display(), path = %args.path);

    let mut doc = document::read_document(&args.file)?;
    let value = serde_json::from_str::<Value>(&args.value).map_err(ValkitError::from)?;

    let written = path::set_value(&mut doc, &Path::from(args.path.as_str()), value);
    if !written {
        tracing::warn!(path = %args.path, "nothing written, document left unchanged");
    }

    document::emit(&doc, args.output.as_deref())?;

    log_op_end!(
        "cli_set",
        duration_ms = start.elapsed().as_millis() as u64,
        written = written
    );
    Ok(())
}
