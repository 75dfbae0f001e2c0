//! Configuration for citation verification

use serde::{Deserialize, Serialize};

/// Configuration for the citation verifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Fraction of a quote's significant words that must appear in the
    /// source corpus for the quote to verify
    pub min_match_ratio: f64,

    /// Minimum word length (characters) for a word to count as significant
    pub min_word_len: usize,
}

impl VerifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.min_match_ratio) {
            return Err(format!(
                "min_match_ratio {} outside [0.0, 1.0]",
                self.min_match_ratio
            ));
        }
        if self.min_word_len == 0 {
            return Err("min_word_len must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Permissive preset: verifies quotes with looser word overlap
    pub fn permissive() -> Self {
        Self {
            min_match_ratio: 0.4,
            ..Self::default()
        }
    }

    /// Strict preset: nearly every significant word must be present
    pub fn strict() -> Self {
        Self {
            min_match_ratio: 0.9,
            ..Self::default()
        }
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            min_match_ratio: 0.60,
            min_word_len: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(VerifierConfig::default().validate().is_ok());
        assert!(VerifierConfig::permissive().validate().is_ok());
        assert!(VerifierConfig::strict().validate().is_ok());
    }

    #[test]
    fn test_invalid_ratio() {
        let mut config = VerifierConfig::default();
        config.min_match_ratio = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_word_len() {
        let mut config = VerifierConfig::default();
        config.min_word_len = 0;
        assert!(config.validate().is_err());
    }
}
