//! End-to-end pipeline tests over the public API

use reqtrace_domain::{BrdRecord, ExtractedItem, NodeKind, RawSourceEntry, TaskRecord};
use reqtrace_graph::{build_traceability_graph, GraphConfig, TraceGraphBuilder};
use std::collections::HashSet;

fn source(kind: &str) -> RawSourceEntry {
    RawSourceEntry {
        kind: Some(kind.to_string()),
        ..Default::default()
    }
}

fn requirement(id: &str, source: Option<&str>) -> ExtractedItem {
    ExtractedItem {
        id: id.to_string(),
        description: format!("Requirement {}", id),
        source: source.map(String::from),
        ..Default::default()
    }
}

fn task(id: &str, requirement_id: Option<&str>) -> TaskRecord {
    TaskRecord {
        id: id.to_string(),
        title: format!("Task {}", id),
        requirement_id: requirement_id.map(String::from),
        status: "todo".to_string(),
    }
}

#[test]
fn single_source_full_attribution() {
    // One email source, one requirement referencing it by type
    let brd = BrdRecord {
        raw_sources: vec![source("email")],
        functional_requirements: vec![requirement("FR-1", Some("email"))],
        ..Default::default()
    };

    let graph = build_traceability_graph(Some(&brd), &[]).unwrap();

    assert_eq!(graph.sources.len(), 1);
    assert_eq!(graph.sources[0].id.to_string(), "SRC-1");

    assert_eq!(graph.links.len(), 1);
    assert_eq!(graph.links[0].from.id, "SRC-1");
    assert_eq!(graph.links[0].to.id, "FR-1");

    assert_eq!(graph.summary.source_coverage, 1.0);
}

#[test]
fn unmatched_source_text_falls_back_to_single_source() {
    let brd = BrdRecord {
        raw_sources: vec![source("slack")],
        functional_requirements: vec![requirement("FR-1", Some("unknown-reference"))],
        ..Default::default()
    };

    let graph = build_traceability_graph(Some(&brd), &[]).unwrap();

    assert_eq!(graph.links.len(), 1);
    assert_eq!(graph.links[0].from.id, "SRC-1");
    assert_eq!(graph.summary.source_coverage, 1.0);
}

#[test]
fn empty_sources_leave_requirements_unattributed() {
    let brd = BrdRecord {
        raw_sources: vec![],
        functional_requirements: vec![
            requirement("FR-1", Some("email")),
            requirement("FR-2", None),
        ],
        ..Default::default()
    };

    let graph = build_traceability_graph(Some(&brd), &[]).unwrap();

    assert!(graph.sources.is_empty());
    assert!(graph.links.is_empty());
    assert_eq!(graph.summary.source_coverage, 0.0);
    assert_eq!(graph.summary.counts.requirements, 2);
}

#[test]
fn task_linkage_by_requirement_id() {
    let brd = BrdRecord {
        raw_sources: vec![source("email")],
        functional_requirements: vec![requirement("FR-1", Some("email"))],
        ..Default::default()
    };
    let tasks = vec![task("t1", Some("FR-1"))];

    let graph = build_traceability_graph(Some(&brd), &tasks).unwrap();

    let task_links: Vec<_> = graph
        .links
        .iter()
        .filter(|l| l.to.kind == NodeKind::Task)
        .collect();
    assert_eq!(task_links.len(), 1);
    assert_eq!(task_links[0].from.id, "FR-1");
    assert_eq!(task_links[0].to.id, "t1");

    assert_eq!(graph.summary.task_coverage, 1.0);
}

#[test]
fn orphan_task_emits_no_link() {
    let brd = BrdRecord {
        functional_requirements: vec![requirement("FR-1", None)],
        ..Default::default()
    };
    let tasks = vec![task("t1", Some("FR-99"))];

    let graph = build_traceability_graph(Some(&brd), &tasks).unwrap();

    assert!(graph.links.iter().all(|l| l.to.kind != NodeKind::Task));
    assert_eq!(graph.summary.task_coverage, 0.0);
    // The orphan task still appears as a node
    assert_eq!(graph.summary.counts.tasks, 1);
}

#[test]
fn pipeline_is_deterministic() {
    let brd = BrdRecord {
        raw_sources: vec![source("email"), source("slack"), source("meeting")],
        business_objectives: vec![requirement("BO-1", Some("email"))],
        functional_requirements: vec![
            requirement("FR-1", Some("slack")),
            requirement("FR-2", Some("nonsense")),
        ],
        non_functional_requirements: vec![requirement("NFR-1", None)],
    };
    let tasks = vec![task("t1", Some("FR-1")), task("t2", None)];

    let first = build_traceability_graph(Some(&brd), &tasks).unwrap();
    let second = build_traceability_graph(Some(&brd), &tasks).unwrap();

    // Byte-identical output, not just structural equality
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn identifier_stability_under_append() {
    let mut brd = BrdRecord {
        raw_sources: vec![source("email"), source("slack")],
        ..Default::default()
    };

    let before = build_traceability_graph(Some(&brd), &[]).unwrap();
    brd.raw_sources.push(source("meeting"));
    let after = build_traceability_graph(Some(&brd), &[]).unwrap();

    for (a, b) in before.sources.iter().zip(after.sources.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.display_name, b.display_name);
    }
    assert_eq!(after.sources[2].id.to_string(), "SRC-3");
}

#[test]
fn no_dangling_links() {
    let brd = BrdRecord {
        raw_sources: vec![source("email"), source("slack")],
        business_objectives: vec![requirement("BO-1", Some("slack"))],
        functional_requirements: vec![
            requirement("FR-1", Some("email")),
            requirement("FR-2", Some("garbage")),
        ],
        non_functional_requirements: vec![requirement("NFR-1", Some("SRC-2"))],
    };
    let tasks = vec![task("t1", Some("FR-1")), task("t2", Some("FR-404"))];

    let graph = build_traceability_graph(Some(&brd), &tasks).unwrap();

    let refs: HashSet<_> = graph.nodes.iter().map(|n| n.node_ref()).collect();
    for link in &graph.links {
        assert!(refs.contains(&link.from), "dangling from: {:?}", link.from);
        assert!(refs.contains(&link.to), "dangling to: {:?}", link.to);
    }
}

#[test]
fn coverage_ratios_stay_in_bounds() {
    let brd = BrdRecord {
        raw_sources: vec![source("email")],
        functional_requirements: vec![
            requirement("FR-1", Some("email")),
            requirement("FR-2", Some("email")),
            requirement("FR-3", None),
        ],
        ..Default::default()
    };
    let tasks = vec![task("t1", Some("FR-1"))];

    let graph = build_traceability_graph(Some(&brd), &tasks).unwrap();

    assert!((0.0..=1.0).contains(&graph.summary.source_coverage));
    assert!((0.0..=1.0).contains(&graph.summary.task_coverage));
}

#[test]
fn mark_ambiguous_policy_skips_fallback() {
    let brd = BrdRecord {
        raw_sources: vec![source("slack")],
        functional_requirements: vec![requirement("FR-1", Some("unknown-reference"))],
        ..Default::default()
    };

    let builder = TraceGraphBuilder::new(GraphConfig::strict());
    let graph = builder.build(&brd, &[]);

    assert!(graph.links.is_empty());
    assert_eq!(graph.summary.source_coverage, 0.0);

    // Matched references still resolve under the strict policy
    let brd = BrdRecord {
        raw_sources: vec![source("slack")],
        functional_requirements: vec![requirement("FR-1", Some("slack"))],
        ..Default::default()
    };
    let graph = builder.build(&brd, &[]);
    assert_eq!(graph.links.len(), 1);
}

#[test]
fn unverified_citations_are_aggregated() {
    let mut flagged = requirement("FR-1", Some("email"));
    flagged.citation_verified = Some(false);
    let mut verified = requirement("FR-2", Some("email"));
    verified.citation_verified = Some(true);

    let brd = BrdRecord {
        raw_sources: vec![source("email")],
        functional_requirements: vec![flagged, verified],
        ..Default::default()
    };

    let graph = build_traceability_graph(Some(&brd), &[]).unwrap();
    assert_eq!(graph.summary.unverified_citations, 1);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_kind() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some("email".to_string())),
            Just(Some("slack".to_string())),
            Just(Some("meeting".to_string())),
            "[a-z]{1,10}".prop_map(Some),
        ]
    }

    proptest! {
        /// Registry identifiers are always SRC-1..SRC-n in input order
        #[test]
        fn registry_identifiers_are_sequential(kinds in proptest::collection::vec(arbitrary_kind(), 0..12)) {
            let brd = BrdRecord {
                raw_sources: kinds
                    .into_iter()
                    .map(|kind| RawSourceEntry { kind, ..Default::default() })
                    .collect(),
                ..Default::default()
            };

            let graph = build_traceability_graph(Some(&brd), &[]).unwrap();
            for (i, s) in graph.sources.iter().enumerate() {
                prop_assert_eq!(s.id.to_string(), format!("SRC-{}", i + 1));
            }
        }

        /// Coverage ratios are always within [0, 1]
        #[test]
        fn ratios_stay_bounded(
            kinds in proptest::collection::vec(arbitrary_kind(), 0..6),
            refs in proptest::collection::vec(proptest::option::of("[a-zA-Z0-9-]{1,8}"), 0..8),
        ) {
            let brd = BrdRecord {
                raw_sources: kinds
                    .into_iter()
                    .map(|kind| RawSourceEntry { kind, ..Default::default() })
                    .collect(),
                functional_requirements: refs
                    .iter()
                    .enumerate()
                    .map(|(i, source)| ExtractedItem {
                        id: format!("FR-{}", i + 1),
                        description: "r".to_string(),
                        source: source.clone(),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            };
            let tasks: Vec<TaskRecord> = refs
                .iter()
                .enumerate()
                .map(|(i, _)| task(&format!("t{}", i), Some(&format!("FR-{}", i))))
                .collect();

            let graph = build_traceability_graph(Some(&brd), &tasks).unwrap();
            prop_assert!((0.0..=1.0).contains(&graph.summary.source_coverage));
            prop_assert!((0.0..=1.0).contains(&graph.summary.task_coverage));
        }
    }
}
