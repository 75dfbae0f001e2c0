//! Reqtrace Graph Builder
//!
//! Reconstructs the traceability graph for one BRD: raw data sources →
//! business objectives/requirements → downstream tasks, with stable source
//! identifiers, auditable attribution, and coverage metrics.
//!
//! # Pipeline
//!
//! ```text
//! BrdRecord + tasks → SourceRegistry → AttributionResolver → links → CoverageSummary
//! ```
//!
//! Four stages run in sequence, each a pure function of its inputs:
//!
//! 1. **Source Registry**: assigns each raw input its `SRC-N` identifier in
//!    stored order and classifies its origin
//! 2. **Attribution Resolver**: matches each extracted item back to a source
//!    through an ordered strategy chain with deterministic fallback
//! 3. **Link Builder**: emits the directed edges of the graph in stable order
//! 4. **Coverage Analyzer**: tallies nodes and computes coverage ratios
//!
//! The whole pipeline holds no state across calls and performs no I/O, so it
//! is idempotent and safe to re-run on every refresh: identical input yields
//! byte-identical output.
//!
//! # Example
//!
//! ```
//! use reqtrace_domain::{BrdRecord, ExtractedItem, RawSourceEntry, TaskRecord};
//! use reqtrace_graph::build_traceability_graph;
//!
//! let brd = BrdRecord {
//!     raw_sources: vec![RawSourceEntry {
//!         kind: Some("email".to_string()),
//!         ..Default::default()
//!     }],
//!     functional_requirements: vec![ExtractedItem {
//!         id: "FR-1".to_string(),
//!         description: "Export reports as PDF".to_string(),
//!         source: Some("email".to_string()),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! let tasks = vec![TaskRecord {
//!     id: "t1".to_string(),
//!     title: "Build the exporter".to_string(),
//!     requirement_id: Some("FR-1".to_string()),
//!     status: "todo".to_string(),
//! }];
//!
//! let graph = build_traceability_graph(Some(&brd), &tasks).unwrap();
//! assert_eq!(graph.sources[0].id.to_string(), "SRC-1");
//! assert_eq!(graph.summary.source_coverage, 1.0);
//! assert_eq!(graph.summary.task_coverage, 1.0);
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod coverage;
mod error;
mod links;
mod registry;
mod resolver;

pub use builder::{build_traceability_graph, TraceGraphBuilder};
pub use config::{AmbiguityPolicy, GraphConfig};
pub use error::GraphError;
pub use registry::SourceRegistry;
pub use resolver::{Attribution, AttributionResolver, MatchStrategy};
