//! Reqtrace CLI library.
//!
//! Builds traceability graphs, verifies citations, and screens for
//! conflicting requirements over BRD and task JSON files.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
