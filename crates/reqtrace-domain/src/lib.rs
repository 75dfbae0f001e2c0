//! Reqtrace Domain Layer
//!
//! This crate contains the core data model for requirements traceability.
//! It defines the fundamental concepts shared by all other layers: data
//! sources with stable positional identity, graph nodes and directed trace
//! links, coverage aggregates, and the wire shapes handed across the
//! boundary from the surrounding application.
//!
//! ## Key Concepts
//!
//! - **DataSource**: A raw input (email, chat, transcript, document) with a
//!   stable `SRC-N` identifier assigned by input order
//! - **TraceLink**: A directed edge in the traceability graph, optionally
//!   carrying a verbatim supporting excerpt
//! - **CoverageSummary**: Aggregate metrics over a graph snapshot
//! - **BrdRecord**: The Business Requirements Document as stored, the input
//!   to every recomputation
//!
//! ## Architecture
//!
//! Everything in this crate is plain data: no I/O, no clocks, no hidden
//! state. The traceability graph is a derived, recomputable view of the
//! BRD and task records; it is never persisted and must come out identical
//! for identical input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod brd;
pub mod coverage;
pub mod graph;
pub mod source;

// Re-exports for convenience
pub use brd::{BrdRecord, ExtractedItem, ItemSection, RawSourceEntry, TaskRecord};
pub use coverage::{CoverageSummary, NodeCounts};
pub use graph::{GraphNode, NodeKind, NodeRef, TraceGraph, TraceLink};
pub use source::{DataSource, OriginKind, SourceId};
