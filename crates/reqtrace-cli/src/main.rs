//! Reqtrace CLI - Requirements traceability over BRD and task records.

use clap::Parser;
use reqtrace_cli::commands;
use reqtrace_cli::{Cli, Command, Formatter, OutputFormat};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        Command::Trace(args) => commands::execute_trace(args, &formatter)?,
        Command::Verify(args) => commands::execute_verify(args, &formatter)?,
        Command::Conflicts(args) => commands::execute_conflicts(args, &formatter)?,
    }

    Ok(())
}
