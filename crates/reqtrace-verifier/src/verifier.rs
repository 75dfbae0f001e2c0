//! Quote verification against the source corpus

use crate::config::VerifierConfig;
use crate::VerifierError;
use regex::Regex;
use reqtrace_domain::BrdRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Replacement text for quotes that failed verification
pub const UNVERIFIED_PLACEHOLDER: &str = "[Citation not verified - review required]";

/// Outcome of one verification pass over a BRD
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationReport {
    /// Quotes found in the corpus
    pub verified: usize,

    /// Quotes that failed the match and were replaced with the placeholder
    pub unverified: usize,

    /// Items skipped: no quote, an existing placeholder, or no significant
    /// words to match
    pub skipped: usize,

    /// Ids of the items whose quotes failed, in document order
    pub flagged: Vec<String>,
}

impl CitationReport {
    /// True when at least one quote failed verification
    pub fn has_unverified(&self) -> bool {
        self.unverified > 0
    }
}

/// Verifies extracted quotes against the raw source corpus
pub struct CitationVerifier {
    config: VerifierConfig,
    word_pattern: Regex,
}

impl CitationVerifier {
    /// Create a verifier with the given configuration
    pub fn new(config: VerifierConfig) -> Result<Self, VerifierError> {
        config.validate().map_err(VerifierError::Config)?;
        let word_pattern = Regex::new(&format!(r"\b\w{{{},}}\b", config.min_word_len))?;
        Ok(Self {
            config,
            word_pattern,
        })
    }

    /// Create a verifier with default configuration
    pub fn default_config() -> Result<Self, VerifierError> {
        Self::new(VerifierConfig::default())
    }

    /// Verify every quoted citation in the BRD, in place
    ///
    /// Each objective/requirement with a `source_quote` gets its
    /// `citation_verified` flag set. Failing quotes are replaced with
    /// [`UNVERIFIED_PLACEHOLDER`] so fabricated evidence is never shown
    /// verbatim. Items without a usable quote are marked unverified but not
    /// counted against the document.
    pub fn verify(&self, brd: &mut BrdRecord) -> CitationReport {
        let corpus = Self::corpus(brd);
        let mut report = CitationReport::default();

        // sections_mut borrows the whole record; corpus is prebuilt above
        for (section, item) in brd.sections_mut() {
            let quote = item.source_quote.as_deref().unwrap_or("").trim().to_string();

            if quote.is_empty() || quote.starts_with('[') {
                item.citation_verified = Some(false);
                report.skipped += 1;
                continue;
            }

            let words = self.significant_words(&quote);
            if words.is_empty() {
                item.citation_verified = Some(false);
                report.skipped += 1;
                continue;
            }

            let matched = words.iter().filter(|w| corpus.contains(w.as_str())).count();
            let ratio = matched as f64 / words.len() as f64;

            if ratio >= self.config.min_match_ratio {
                item.citation_verified = Some(true);
                report.verified += 1;
            } else {
                item.citation_verified = Some(false);
                item.source_quote = Some(UNVERIFIED_PLACEHOLDER.to_string());
                report.unverified += 1;
                report.flagged.push(item.id.clone());
                warn!(
                    section = section.as_str(),
                    item = %item.id,
                    ratio,
                    "unverified citation: '{}'",
                    truncate(&quote, 60)
                );
            }
        }

        if report.has_unverified() {
            warn!(
                count = report.unverified,
                "unverified citations flagged for review"
            );
        }

        report
    }

    /// Lowercased concatenation of all raw-source content
    fn corpus(brd: &BrdRecord) -> String {
        brd.raw_sources
            .iter()
            .filter_map(|s| s.content.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// The quote's significant words, lowercased and deduplicated
    fn significant_words(&self, quote: &str) -> HashSet<String> {
        self.word_pattern
            .find_iter(&quote.to_lowercase())
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

fn truncate(text: &str, max_len: usize) -> String {
    text.chars().take(max_len).collect()
}
