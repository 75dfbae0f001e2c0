//! Reqtrace Citation Verifier
//!
//! Anti-hallucination guard for extracted BRD content. The extraction
//! process quotes the raw sources it worked from; nothing stops it from
//! inventing a quote. This crate checks every `source_quote` against the
//! actual source corpus and flags the ones that cannot be found, so the
//! review UI can warn instead of presenting fabricated evidence as fact.
//!
//! # Approach
//!
//! Word-set containment rather than substring match: quotes survive
//! whitespace and punctuation drift, but a quote whose significant words
//! mostly do not appear anywhere in the corpus fails. A failed quote is
//! replaced with a review placeholder and its item is marked
//! `citation_verified = false`; the Coverage Analyzer aggregates that flag
//! downstream.
//!
//! # Example
//!
//! ```
//! use reqtrace_domain::{BrdRecord, ExtractedItem, RawSourceEntry};
//! use reqtrace_verifier::{CitationVerifier, VerifierConfig};
//!
//! let mut brd = BrdRecord {
//!     raw_sources: vec![RawSourceEntry {
//!         kind: Some("email".to_string()),
//!         content: Some("We absolutely need PDF export before the launch".to_string()),
//!         ..Default::default()
//!     }],
//!     functional_requirements: vec![ExtractedItem {
//!         id: "FR-1".to_string(),
//!         description: "PDF export".to_string(),
//!         source_quote: Some("need PDF export before the launch".to_string()),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let verifier = CitationVerifier::new(VerifierConfig::default()).unwrap();
//! let report = verifier.verify(&mut brd);
//!
//! assert_eq!(report.verified, 1);
//! assert_eq!(brd.functional_requirements[0].citation_verified, Some(true));
//! ```

#![warn(missing_docs)]

mod config;
mod verifier;

pub use config::VerifierConfig;
pub use verifier::{CitationReport, CitationVerifier, UNVERIFIED_PLACEHOLDER};

use thiserror::Error;

/// Errors that can occur while setting up verification
#[derive(Error, Debug)]
pub enum VerifierError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The word pattern failed to compile
    #[error("Invalid word pattern: {0}")]
    Pattern(#[from] regex::Error),
}
