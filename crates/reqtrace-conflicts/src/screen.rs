//! Candidate-pair selection

use crate::config::ConflictConfig;
use crate::types::{CandidatePair, ConflictSignal, ItemHandle};
use crate::ConflictError;
use regex::Regex;
use reqtrace_domain::BrdRecord;
use std::collections::HashSet;
use tracing::{debug, warn};

// Keywords that signal potential opposition between two statements
const NEGATION_PATTERN: &str = r"(?i)\b(no\b|not\b|never\b|cannot\b|must not|shall not|prevent|restrict|limit|disallow|forbid|prohibit|exclude|block|deny)\b";

// Resource and capacity words that requirements often contend over
const RESOURCE_PATTERN: &str = r"(?i)\b(budget|cost|bandwidth|capacity|memory|storage|cpu|staff|team|resource|time|hours|deadline|schedule|timeline|concurrent|simultaneous)\b";

/// Selects candidate conflict pairs from a BRD
///
/// Deterministic and cheap: word-set overlap plus keyword screens, no
/// external calls. Pairs are considered in document order and the output is
/// capped, so repeated runs over the same document select the same pairs.
pub struct ConflictScreen {
    config: ConflictConfig,
    negation: Regex,
    resource: Regex,
    word: Regex,
}

impl ConflictScreen {
    /// Create a screen with the given configuration
    pub fn new(config: ConflictConfig) -> Result<Self, ConflictError> {
        config.validate().map_err(ConflictError::Config)?;
        Ok(Self {
            negation: Regex::new(NEGATION_PATTERN)?,
            resource: Regex::new(RESOURCE_PATTERN)?,
            word: Regex::new(&format!(r"\b\w{{{},}}\b", config.min_word_len))?,
            config,
        })
    }

    /// Create a screen with default configuration
    pub fn default_config() -> Result<Self, ConflictError> {
        Self::new(ConflictConfig::default())
    }

    /// Select candidate pairs across all BRD sections, in document order
    pub fn candidate_pairs(&self, brd: &BrdRecord) -> Vec<CandidatePair> {
        let items: Vec<ItemHandle> = brd
            .sections()
            .map(|(section, item)| ItemHandle {
                section,
                id: item.id.clone(),
                text: item.text().to_string(),
            })
            .collect();

        if items.len() < 2 {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        let mut truncated = false;

        'outer: for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                if let Some(pair) = self.screen_pair(&items[i], &items[j]) {
                    if candidates.len() == self.config.max_candidates {
                        truncated = true;
                        break 'outer;
                    }
                    candidates.push(pair);
                }
            }
        }

        if truncated {
            warn!(
                cap = self.config.max_candidates,
                "candidate cap reached; remaining pairs not screened"
            );
        }
        debug!(count = candidates.len(), "selected conflict candidates");

        candidates
    }

    fn screen_pair(&self, first: &ItemHandle, second: &ItemHandle) -> Option<CandidatePair> {
        let a = first.text.to_lowercase();
        let b = second.text.to_lowercase();
        let overlap = self.word_overlap(&a, &b);

        // High overlap with negation in either text: likely contradiction
        if overlap > self.config.min_overlap
            && (self.negation.is_match(&a) || self.negation.is_match(&b))
        {
            return Some(CandidatePair {
                first: first.clone(),
                second: second.clone(),
                overlap,
                signal: ConflictSignal::NegationOverlap,
            });
        }

        // Same resource keywords across different sections: possible contention
        let a_resources: HashSet<&str> =
            self.resource.find_iter(&a).map(|m| m.as_str()).collect();
        if !a_resources.is_empty() && first.section != second.section {
            let shares_resource = self
                .resource
                .find_iter(&b)
                .any(|m| a_resources.contains(m.as_str()));
            if shares_resource {
                return Some(CandidatePair {
                    first: first.clone(),
                    second: second.clone(),
                    overlap,
                    signal: ConflictSignal::SharedResource,
                });
            }
        }

        None
    }

    /// Jaccard similarity of the two texts' significant word sets
    fn word_overlap(&self, a: &str, b: &str) -> f64 {
        let wa: HashSet<&str> = self.word.find_iter(a).map(|m| m.as_str()).collect();
        let wb: HashSet<&str> = self.word.find_iter(b).map(|m| m.as_str()).collect();
        if wa.is_empty() || wb.is_empty() {
            return 0.0;
        }
        let intersection = wa.intersection(&wb).count();
        let union = wa.union(&wb).count();
        intersection as f64 / union as f64
    }
}
