//! Copy command
//!
//! Usage: valkit copy <FILE> [--replace KEY=VALUE]... [--detect-regexp] [--options <FILE>]

use super::{document, CommandResult};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use valkit_core::{deep_copy_with, log_op_end, log_op_start, CopyOptions, ValkitError};

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// JSON document to copy
    pub file: PathBuf,

    /// Replace `{KEY}` in strings with VALUE
    #[arg(short, long = "replace", value_name = "KEY=VALUE", value_parser = parse_replacement)]
    pub replacements: Vec<(String, String)>,

    /// Turn `{pattern, flags}` objects into regular expressions
    #[arg(long)]
    pub detect_regexp: bool,

    /// JSON file holding copy options (`{"replace": {...}, "detectRegExp": true}`)
    #[arg(long)]
    pub options: Option<PathBuf>,
}

fn parse_replacement(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}

/// Options file first, then command-line flags on top
fn copy_options(args: &CopyArgs) -> CommandResult<CopyOptions> {
    let mut options = match &args.options {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            serde_json::from_str::<CopyOptions>(&text).map_err(ValkitError::from)?
        }
        None => CopyOptions::default(),
    };

    if !args.replacements.is_empty() {
        options
            .replace
            .get_or_insert_with(Default::default)
            .extend(args.replacements.iter().cloned());
    }
    if args.detect_regexp {
        options.detect_regexp = true;
    }
    Ok(options)
}

/// Execute copy command
pub fn execute(args: CopyArgs) -> CommandResult {
    let start = Instant::now();
    log_op_start!("cli_copy", file = %args.file.display());

    let doc = document::read_document(&args.file)?;
    let options = copy_options(&args)?;
    let copied = deep_copy_with(&doc, &options);
    document::emit(&copied, None)?;

    log_op_end!("cli_copy", duration_ms = start.elapsed().as_millis() as u64);
    Ok(())
}
