//! Configuration for the graph pipeline

use serde::{Deserialize, Serialize};

/// What the resolver does when attribution text matches nothing
///
/// The historical behavior attributes unmatched items to the first source in
/// registry order, which reflects the dominant single-source BRD but can
/// misattribute in true multi-source documents. The alternative marks such
/// items ambiguous instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Attribute to the first source in registry order (heuristic, not a
    /// guarantee)
    FirstSource,

    /// Leave the item explicitly ambiguous
    MarkAmbiguous,
}

impl Default for AmbiguityPolicy {
    fn default() -> Self {
        AmbiguityPolicy::FirstSource
    }
}

/// Configuration for the graph pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Resolver behavior for unmatched attribution text
    #[serde(default)]
    pub ambiguity: AmbiguityPolicy,

    /// Maximum node label length (characters); longer labels are truncated
    /// at a char boundary with a trailing ellipsis
    pub max_label_len: usize,
}

impl GraphConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_label_len == 0 {
            return Err("max_label_len must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Strict preset: never guess attribution for unmatched items
    pub fn strict() -> Self {
        Self {
            ambiguity: AmbiguityPolicy::MarkAmbiguous,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            ambiguity: AmbiguityPolicy::default(),
            max_label_len: 80,
        }
    }
}
