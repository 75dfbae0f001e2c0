//! Configuration for conflict screening

use serde::{Deserialize, Serialize};

/// Configuration for candidate selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictConfig {
    /// Minimum Jaccard word overlap for the negation rule to fire
    pub min_overlap: f64,

    /// Maximum candidate pairs handed to the classifier per document
    pub max_candidates: usize,

    /// Minimum word length (characters) for overlap computation
    pub min_word_len: usize,
}

impl ConflictConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.min_overlap) {
            return Err(format!("min_overlap {} outside [0.0, 1.0]", self.min_overlap));
        }
        if self.max_candidates == 0 {
            return Err("max_candidates must be greater than 0".to_string());
        }
        if self.min_word_len == 0 {
            return Err("min_word_len must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            min_overlap: 0.30,
            max_candidates: 20,
            min_word_len: 4,
        }
    }
}
