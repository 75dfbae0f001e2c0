//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The BRD file could not be decoded
    #[error("BRD parse error: {0}")]
    Extract(#[from] reqtrace_extract::ExtractError),

    /// Citation verifier error
    #[error("Verifier error: {0}")]
    Verifier(#[from] reqtrace_verifier::VerifierError),

    /// Conflict screening error
    #[error("Conflict screening error: {0}")]
    Conflicts(#[from] reqtrace_conflicts::ConflictError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
