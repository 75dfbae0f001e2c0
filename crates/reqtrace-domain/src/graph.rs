//! Traceability graph nodes and directed links

use crate::coverage::CoverageSummary;
use crate::source::DataSource;
use serde::{Deserialize, Serialize};

/// Kind of node in the traceability graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Raw data source (`SRC-N`)
    Source,

    /// Business objective
    Objective,

    /// Functional or non-functional requirement
    Requirement,

    /// Downstream task derived from a requirement
    Task,
}

impl NodeKind {
    /// Lowercase name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Source => "source",
            NodeKind::Objective => "objective",
            NodeKind::Requirement => "requirement",
            NodeKind::Task => "task",
        }
    }
}

/// Link endpoint: a `(kind, id)` pair
///
/// Identifier strings are only unique within a kind (a task's primary key
/// may happen to equal a requirement id), so endpoints carry the kind and
/// existence checks compare both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRef {
    /// Node kind
    pub kind: NodeKind,

    /// Domain identifier ("SRC-2", "FR-1", a task primary key)
    pub id: String,
}

impl NodeRef {
    /// Create a new endpoint reference
    pub fn new(kind: NodeKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// A node in the traceability graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Domain identifier
    pub id: String,

    /// Node kind
    pub kind: NodeKind,

    /// Short human-readable text
    pub label: String,
}

impl GraphNode {
    /// The endpoint reference for this node
    pub fn node_ref(&self) -> NodeRef {
        NodeRef::new(self.kind, self.id.clone())
    }
}

/// A directed edge in the traceability graph
///
/// Every link's endpoints must reference nodes present in the same graph
/// snapshot; links that cannot be resolved are dropped, never emitted with
/// a missing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceLink {
    /// Edge origin
    pub from: NodeRef,

    /// Edge target
    pub to: NodeRef,

    /// Verbatim quoted snippet from the source supporting the link, when
    /// the extraction recorded one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

impl TraceLink {
    /// Create a link with no excerpt
    pub fn new(from: NodeRef, to: NodeRef) -> Self {
        Self {
            from,
            to,
            excerpt: None,
        }
    }

    /// Attach a supporting excerpt
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}

/// The full traceability snapshot for one BRD
///
/// Owned by the BRD it describes; recomputed on demand and never stored.
/// Holds no reference back to raw-source content beyond excerpt strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceGraph {
    /// The source registry, in assignment order
    pub sources: Vec<DataSource>,

    /// All nodes: sources, objectives, requirements, tasks
    pub nodes: Vec<GraphNode>,

    /// Directed edges, in stable emission order
    pub links: Vec<TraceLink>,

    /// Aggregate coverage metrics over this snapshot
    pub summary: CoverageSummary,
}
