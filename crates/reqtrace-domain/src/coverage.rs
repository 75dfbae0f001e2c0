//! Coverage aggregates over a graph snapshot

use serde::{Deserialize, Serialize};

/// Node tallies by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCounts {
    /// Data sources
    pub sources: usize,

    /// Business objectives
    pub objectives: usize,

    /// Functional + non-functional requirements
    pub requirements: usize,

    /// Downstream tasks
    pub tasks: usize,
}

impl NodeCounts {
    /// Total nodes across all kinds
    pub fn total(&self) -> usize {
        self.sources + self.objectives + self.requirements + self.tasks
    }
}

/// Aggregate metrics over one traceability graph snapshot
///
/// Recomputed on demand, never stored. Ratios are exact values in [0, 1];
/// no rounding happens here (presentation rounding, if any, is the UI's
/// concern). Both ratios are 0.0 when there are no requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    /// Node tallies by kind
    pub counts: NodeCounts,

    /// Fraction of requirements with at least one inbound source link
    pub source_coverage: f64,

    /// Fraction of requirements with at least one outbound task link
    pub task_coverage: f64,

    /// Requirements whose extracted record explicitly marks citation
    /// verification as failed
    pub unverified_citations: usize,
}

impl CoverageSummary {
    /// An all-zero summary, the result for an empty graph
    pub fn empty() -> Self {
        Self {
            counts: NodeCounts::default(),
            source_coverage: 0.0,
            task_coverage: 0.0,
            unverified_citations: 0,
        }
    }
}
