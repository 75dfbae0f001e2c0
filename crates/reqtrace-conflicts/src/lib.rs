//! Reqtrace Conflict Screening
//!
//! Detects potentially contradictory requirements in an extracted BRD.
//!
//! # Architecture
//!
//! Two stages, split so the expensive part stays swappable:
//!
//! 1. **Candidate selection** (this crate, deterministic): pairs of items
//!    with high word overlap plus an opposition signal (negation language,
//!    or contention over the same named resource). Cheap enough to run on
//!    every document; capped so downstream cost is bounded.
//! 2. **Classification** (behind [`ConflictClassifier`]): turns candidate
//!    pairs into confirmed conflicts with severity and a recommendation.
//!    The production classifier in the surrounding application consults a
//!    language model; [`HeuristicClassifier`] is the deterministic default
//!    that needs no external service.
//!
//! # Example
//!
//! ```
//! use reqtrace_conflicts::{detect_conflicts, ConflictConfig, ConflictScreen, HeuristicClassifier};
//! use reqtrace_domain::{BrdRecord, ExtractedItem};
//!
//! let brd = BrdRecord {
//!     functional_requirements: vec![
//!         ExtractedItem {
//!             id: "FR-1".to_string(),
//!             description: "Support agents must access customer records remotely".to_string(),
//!             ..Default::default()
//!         },
//!         ExtractedItem {
//!             id: "FR-2".to_string(),
//!             description: "Customer records must never be accessible remotely".to_string(),
//!             ..Default::default()
//!         },
//!     ],
//!     ..Default::default()
//! };
//!
//! let screen = ConflictScreen::new(ConflictConfig::default()).unwrap();
//! let conflicts = detect_conflicts(&screen, &HeuristicClassifier, &brd).unwrap();
//! assert_eq!(conflicts.len(), 1);
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod screen;
mod types;

pub use classifier::{ConflictClassifier, HeuristicClassifier};
pub use config::ConflictConfig;
pub use screen::ConflictScreen;
pub use types::{CandidatePair, Conflict, ConflictSignal, ItemHandle, Severity};

use reqtrace_domain::BrdRecord;
use thiserror::Error;

/// Errors that can occur while setting up conflict screening
#[derive(Error, Debug)]
pub enum ConflictError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A keyword pattern failed to compile
    #[error("Invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Screen a BRD and classify the candidates in one call
///
/// Returns an empty list for documents with fewer than two extracted items.
pub fn detect_conflicts<C: ConflictClassifier>(
    screen: &ConflictScreen,
    classifier: &C,
    brd: &BrdRecord,
) -> Result<Vec<Conflict>, C::Error> {
    let candidates = screen.candidate_pairs(brd);
    if candidates.is_empty() {
        return Ok(Vec::new());
    }
    classifier.classify(&candidates)
}
