// src/cli.rs
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::core::finder::find_field_usage;
use crate::core::matcher::UsageQuery;
use crate::models::MetadataKind;
use crate::utils::print_report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print debug logs to stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search field usage in reports or dashboards
    Find(FindArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// Path to the Salesforce project
    #[arg(short, long)]
    pub path: PathBuf,

    /// Metadata type to search
    #[arg(short, long, value_enum)]
    pub metadata: MetadataKind,

    /// Object API name (e.g., "Account")
    #[arg(short, long)]
    pub object: String,

    /// Field API name (e.g., "Industry")
    #[arg(short, long)]
    pub field: String,

    /// Only report usages in filter or grouping columns
    #[arg(short, long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Query followed by a match count
    Text,
    /// A single JSON object
    Json,
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over
/// `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the parsed command line.
///
/// # Errors
///
/// Propagates every [`FieldUsageError`](crate::FieldUsageError) raised by the
/// search, and output failures.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Find(args) => run_find(&args),
    }
}

fn run_find(args: &FindArgs) -> Result<()> {
    let query = UsageQuery::new(args.object.as_str(), args.field.as_str(), args.strict);
    let report = find_field_usage(&args.path, args.metadata, &query)?;
    print_report(&report, args.format)
}
