//! Conflict screening types

use reqtrace_domain::ItemSection;
use serde::{Deserialize, Serialize};

/// Snapshot of one extracted item as seen by the screen
///
/// Carries only what screening and classification need; no reference back
/// into the BRD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemHandle {
    /// BRD section the item came from
    pub section: ItemSection,

    /// Domain identifier ("FR-1", "NFR-2", "BO-1")
    pub id: String,

    /// The item's matching text (description, or title when empty)
    pub text: String,
}

/// Why a pair was selected as a conflict candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictSignal {
    /// High word overlap combined with negation language in either text
    NegationOverlap,

    /// Both texts contend over the same named resource, across sections
    SharedResource,
}

/// A pair of items worth classifying
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePair {
    /// First item (earlier in document order)
    pub first: ItemHandle,

    /// Second item
    pub second: ItemHandle,

    /// Jaccard word-set overlap of the two texts, in [0, 1]
    pub overlap: f64,

    /// The signal that selected this pair
    pub signal: ConflictSignal,
}

/// Conflict severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Worth a look during review
    Low,

    /// Likely needs a product decision
    Medium,

    /// Directly contradictory as written
    High,
}

impl Severity {
    /// Lowercase name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// A confirmed conflict between two extracted items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Sequential identifier ("CONF-1")
    pub id: String,

    /// Severity assessment
    pub severity: Severity,

    /// Id of the first conflicting item
    pub first_id: String,

    /// Id of the second conflicting item
    pub second_id: String,

    /// What contradicts what
    pub description: String,

    /// Suggested resolution path
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert_eq!(Severity::High.as_str(), "high");
    }
}
