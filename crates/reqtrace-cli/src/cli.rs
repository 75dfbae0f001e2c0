//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reqtrace CLI - Requirements traceability over BRD and task records.
#[derive(Debug, Parser)]
#[command(name = "reqtrace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (links/ids only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the traceability graph for a BRD
    Trace(TraceArgs),

    /// Verify extracted citations against the raw source text
    Verify(VerifyArgs),

    /// Screen the BRD for conflicting requirements
    Conflicts(ConflictsArgs),
}

/// Arguments for the trace command.
#[derive(Debug, Parser)]
pub struct TraceArgs {
    /// BRD JSON file (raw extraction output is accepted; code fences are
    /// stripped)
    pub brd: PathBuf,

    /// Task list JSON file
    #[arg(short, long)]
    pub tasks: Option<PathBuf>,

    /// Re-run citation verification before building
    #[arg(long)]
    pub verify: bool,

    /// Mark unmatched attributions ambiguous instead of guessing the first
    /// source
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// BRD JSON file
    pub brd: PathBuf,

    /// Match-ratio threshold (0.0-1.0, default 0.6)
    #[arg(short = 't', long)]
    pub threshold: Option<f64>,
}

/// Arguments for the conflicts command.
#[derive(Debug, Parser)]
pub struct ConflictsArgs {
    /// BRD JSON file
    pub brd: PathBuf,

    /// Maximum candidate pairs to screen
    #[arg(long)]
    pub max_candidates: Option<usize>,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Json => crate::output::OutputFormat::Json,
            CliFormat::Quiet => crate::output::OutputFormat::Quiet,
        }
    }
}
