//! Coverage Analyzer: aggregate metrics over a graph snapshot

use reqtrace_domain::{BrdRecord, CoverageSummary, GraphNode, NodeCounts, NodeKind, TraceLink};
use std::collections::HashSet;

/// Compute the coverage summary for one graph snapshot
///
/// Ratios are exact values in [0, 1] and defined as 0.0 when there are no
/// requirements. "Requirements" means functional + non-functional;
/// objectives are counted as nodes but not in the ratios. The
/// unverified-citation count aggregates the flag set upstream by citation
/// verification; it is not computed here.
pub(crate) fn summarize(nodes: &[GraphNode], links: &[TraceLink], brd: &BrdRecord) -> CoverageSummary {
    let mut counts = NodeCounts::default();
    for node in nodes {
        match node.kind {
            NodeKind::Source => counts.sources += 1,
            NodeKind::Objective => counts.objectives += 1,
            NodeKind::Requirement => counts.requirements += 1,
            NodeKind::Task => counts.tasks += 1,
        }
    }

    let sourced: HashSet<&str> = links
        .iter()
        .filter(|l| l.from.kind == NodeKind::Source && l.to.kind == NodeKind::Requirement)
        .map(|l| l.to.id.as_str())
        .collect();

    let tasked: HashSet<&str> = links
        .iter()
        .filter(|l| l.from.kind == NodeKind::Requirement && l.to.kind == NodeKind::Task)
        .map(|l| l.from.id.as_str())
        .collect();

    let unverified_citations = brd
        .requirements()
        .filter(|r| r.citation_verified == Some(false))
        .count();

    CoverageSummary {
        counts,
        source_coverage: ratio(sourced.len(), counts.requirements),
        task_coverage: ratio(tasked.len(), counts.requirements),
        unverified_citations,
    }
}

/// Exact ratio with a zero-denominator guard
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqtrace_domain::{ExtractedItem, NodeRef};

    fn node(kind: NodeKind, id: &str) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            kind,
            label: id.to_string(),
        }
    }

    fn link(from: (NodeKind, &str), to: (NodeKind, &str)) -> TraceLink {
        TraceLink::new(NodeRef::new(from.0, from.1), NodeRef::new(to.0, to.1))
    }

    fn brd_with_flags(flags: &[Option<bool>]) -> BrdRecord {
        BrdRecord {
            functional_requirements: flags
                .iter()
                .enumerate()
                .map(|(i, flag)| ExtractedItem {
                    id: format!("FR-{}", i + 1),
                    citation_verified: *flag,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_by_kind() {
        let nodes = vec![
            node(NodeKind::Source, "SRC-1"),
            node(NodeKind::Objective, "BO-1"),
            node(NodeKind::Requirement, "FR-1"),
            node(NodeKind::Requirement, "NFR-1"),
            node(NodeKind::Task, "t1"),
        ];
        let summary = summarize(&nodes, &[], &BrdRecord::default());

        assert_eq!(summary.counts.sources, 1);
        assert_eq!(summary.counts.objectives, 1);
        assert_eq!(summary.counts.requirements, 2);
        assert_eq!(summary.counts.tasks, 1);
    }

    #[test]
    fn test_zero_requirements_yields_zero_ratios() {
        let nodes = vec![node(NodeKind::Source, "SRC-1")];
        let summary = summarize(&nodes, &[], &BrdRecord::default());

        assert_eq!(summary.source_coverage, 0.0);
        assert_eq!(summary.task_coverage, 0.0);
    }

    #[test]
    fn test_partial_source_coverage() {
        let nodes = vec![
            node(NodeKind::Source, "SRC-1"),
            node(NodeKind::Requirement, "FR-1"),
            node(NodeKind::Requirement, "FR-2"),
        ];
        let links = vec![link(
            (NodeKind::Source, "SRC-1"),
            (NodeKind::Requirement, "FR-1"),
        )];
        let summary = summarize(&nodes, &links, &BrdRecord::default());

        assert_eq!(summary.source_coverage, 0.5);
        assert_eq!(summary.task_coverage, 0.0);
    }

    #[test]
    fn test_duplicate_links_count_once() {
        let nodes = vec![
            node(NodeKind::Source, "SRC-1"),
            node(NodeKind::Source, "SRC-2"),
            node(NodeKind::Requirement, "FR-1"),
        ];
        // Two inbound source links to the same requirement: still one
        // distinct covered requirement
        let links = vec![
            link((NodeKind::Source, "SRC-1"), (NodeKind::Requirement, "FR-1")),
            link((NodeKind::Source, "SRC-2"), (NodeKind::Requirement, "FR-1")),
        ];
        let summary = summarize(&nodes, &links, &BrdRecord::default());

        assert_eq!(summary.source_coverage, 1.0);
    }

    #[test]
    fn test_task_coverage() {
        let nodes = vec![
            node(NodeKind::Requirement, "FR-1"),
            node(NodeKind::Requirement, "FR-2"),
            node(NodeKind::Task, "t1"),
        ];
        let links = vec![link(
            (NodeKind::Requirement, "FR-2"),
            (NodeKind::Task, "t1"),
        )];
        let summary = summarize(&nodes, &links, &BrdRecord::default());

        assert_eq!(summary.task_coverage, 0.5);
    }

    #[test]
    fn test_unverified_citation_count() {
        // Only an explicit `false` counts; absent flags do not
        let brd = brd_with_flags(&[Some(false), Some(true), None, Some(false)]);
        let summary = summarize(&[], &[], &brd);

        assert_eq!(summary.unverified_citations, 2);
    }
}
