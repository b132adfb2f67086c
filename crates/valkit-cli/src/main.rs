//! valkit CLI
//!
//! Command-line access to the valkit accessor, structural engine and type
//! checks over JSON documents

use clap::{Parser, Subcommand, ValueEnum};
use valkit_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "valkit")]
#[command(about = "valkit - Runtime type checks and object utilities for JSON", long_about = None)]
struct Cli {
    /// Logging profile (logs go to stderr)
    #[arg(long, global = true, value_enum)]
    log: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable, debug level
    Dev,
    /// JSON lines, info level
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read the value at a nested path
    Get(commands::get::GetArgs),
    /// Write a value at a nested path
    Set(commands::set::SetArgs),
    /// Compare two documents for semantic equality
    Equals(commands::equals::EqualsArgs),
    /// Deep-copy a document with templating and regex detection
    Copy(commands::copy::CopyArgs),
    /// Check a value against type names
    Check(commands::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile.into());
    }

    let result = match cli.command {
        Commands::Get(args) => commands::get::execute(args),
        Commands::Set(args) => commands::set::execute(args),
        Commands::Equals(args) => match commands::equals::execute(args) {
            Ok(false) => std::process::exit(1),
            other => other.map(|_| ()),
        },
        Commands::Copy(args) => commands::copy::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
