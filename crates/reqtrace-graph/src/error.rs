//! Error types for graph building

use thiserror::Error;

/// Errors that can surface from the graph pipeline
///
/// Deliberately small: malformed-but-present data (missing `source` fields,
/// unknown origin types, orphan task references, empty arrays) degrades
/// through fallback rules instead of erroring. Only programmer-input errors
/// from the surrounding application fail fast.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The BRD record itself was absent
    #[error("BRD record is missing; cannot build a traceability graph")]
    MissingBrd,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
