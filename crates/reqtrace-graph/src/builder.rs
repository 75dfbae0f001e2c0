//! Pipeline facade: registry → resolver → links → coverage

use crate::config::GraphConfig;
use crate::coverage;
use crate::error::GraphError;
use crate::links;
use crate::registry::SourceRegistry;
use crate::resolver::AttributionResolver;
use reqtrace_domain::{BrdRecord, TaskRecord, TraceGraph};
use tracing::info;

/// Builds the traceability graph for one BRD
///
/// Stateless apart from configuration: every call derives the graph from
/// scratch, so the builder can be shared and invoked concurrently for
/// different BRDs with no coordination.
#[derive(Debug, Clone, Default)]
pub struct TraceGraphBuilder {
    config: GraphConfig,
}

impl TraceGraphBuilder {
    /// Create a builder with the given configuration
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// The builder's configuration
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Build the full traceability snapshot
    ///
    /// Total over its input: empty sections and malformed optional fields
    /// degrade through the documented fallback rules, they never error.
    pub fn build(&self, brd: &BrdRecord, tasks: &[TaskRecord]) -> TraceGraph {
        let registry = SourceRegistry::from_entries(&brd.raw_sources);

        let resolver = AttributionResolver::new(self.config.ambiguity);
        let objective_attributions = resolver.resolve_all(&registry, &brd.business_objectives);
        let requirement_attributions = resolver.resolve_all(&registry, brd.requirements());

        let nodes = links::collect_nodes(&registry, brd, tasks, self.config.max_label_len);
        let links = links::build_links(
            brd,
            &objective_attributions,
            &requirement_attributions,
            tasks,
            &nodes,
        );

        let summary = coverage::summarize(&nodes, &links, brd);

        info!(
            sources = registry.len(),
            nodes = nodes.len(),
            links = links.len(),
            "built traceability graph"
        );

        TraceGraph {
            sources: registry.into_sources(),
            nodes,
            links,
            summary,
        }
    }
}

/// Build the traceability graph for a BRD fetched by the caller
///
/// The single entry point for the surrounding application. `None` means the
/// record was absent from the store entirely, a programmer-input error that
/// fails fast; every data-quality problem inside a present record degrades
/// instead (the traceability view should render something rather than fail
/// the page on partial data).
pub fn build_traceability_graph(
    brd: Option<&BrdRecord>,
    tasks: &[TaskRecord],
) -> Result<TraceGraph, GraphError> {
    let brd = brd.ok_or(GraphError::MissingBrd)?;
    Ok(TraceGraphBuilder::default().build(brd, tasks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_brd_fails_fast() {
        let result = build_traceability_graph(None, &[]);
        assert!(matches!(result, Err(GraphError::MissingBrd)));
    }

    #[test]
    fn test_empty_brd_builds_empty_graph() {
        let brd = BrdRecord::default();
        let graph = build_traceability_graph(Some(&brd), &[]).unwrap();

        assert!(graph.sources.is_empty());
        assert!(graph.nodes.is_empty());
        assert!(graph.links.is_empty());
        assert_eq!(graph.summary.counts.total(), 0);
    }
}
