//! Link Builder: nodes and directed edges of the traceability graph

use crate::registry::SourceRegistry;
use crate::resolver::Attribution;
use reqtrace_domain::{BrdRecord, GraphNode, NodeKind, NodeRef, TaskRecord, TraceLink};
use std::collections::HashSet;
use tracing::debug;

/// Truncate a label at a char boundary, appending an ellipsis
pub(crate) fn truncate_label(text: &str, max_len: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Collect the full node set: sources, objectives, requirements, tasks
pub(crate) fn collect_nodes(
    registry: &SourceRegistry,
    brd: &BrdRecord,
    tasks: &[TaskRecord],
    max_label_len: usize,
) -> Vec<GraphNode> {
    let mut nodes = Vec::new();

    for source in registry.iter() {
        nodes.push(GraphNode {
            id: source.id.to_string(),
            kind: NodeKind::Source,
            label: truncate_label(&source.display_name, max_label_len),
        });
    }

    for objective in &brd.business_objectives {
        nodes.push(GraphNode {
            id: objective.id.clone(),
            kind: NodeKind::Objective,
            label: truncate_label(objective.label(), max_label_len),
        });
    }

    for requirement in brd.requirements() {
        nodes.push(GraphNode {
            id: requirement.id.clone(),
            kind: NodeKind::Requirement,
            label: truncate_label(requirement.label(), max_label_len),
        });
    }

    for task in tasks {
        let label = if task.title.trim().is_empty() {
            &task.id
        } else {
            &task.title
        };
        nodes.push(GraphNode {
            id: task.id.clone(),
            kind: NodeKind::Task,
            label: truncate_label(label, max_label_len),
        });
    }

    nodes
}

/// Build the full link list in stable emission order
///
/// Order: source→objective (objective list order), source→requirement
/// (functional then non-functional, list order), requirement→task (task
/// list order). The order matters only for deterministic comparison; the
/// link set is logically unordered.
///
/// Links whose endpoints cannot be resolved to a node in `nodes` are
/// discarded, never emitted with a missing endpoint.
pub(crate) fn build_links(
    brd: &BrdRecord,
    objective_attributions: &[Attribution],
    requirement_attributions: &[Attribution],
    tasks: &[TaskRecord],
    nodes: &[GraphNode],
) -> Vec<TraceLink> {
    let mut links = Vec::new();

    for (objective, attribution) in brd.business_objectives.iter().zip(objective_attributions) {
        if let Some(source) = attribution.source() {
            links.push(attributed_link(
                source.to_string(),
                NodeKind::Objective,
                &objective.id,
                objective.source_quote.as_deref(),
            ));
        }
    }

    for (requirement, attribution) in brd.requirements().zip(requirement_attributions) {
        if let Some(source) = attribution.source() {
            links.push(attributed_link(
                source.to_string(),
                NodeKind::Requirement,
                &requirement.id,
                requirement.source_quote.as_deref(),
            ));
        }
    }

    let known_requirements: HashSet<&str> = brd
        .requirements()
        .map(|r| r.id.as_str())
        .filter(|id| !id.trim().is_empty())
        .collect();

    for task in tasks {
        let Some(requirement_id) = task.requirement_id.as_deref().map(str::trim) else {
            continue;
        };
        if requirement_id.is_empty() {
            continue;
        }
        if known_requirements.contains(requirement_id) {
            links.push(TraceLink::new(
                NodeRef::new(NodeKind::Requirement, requirement_id),
                NodeRef::new(NodeKind::Task, task.id.clone()),
            ));
        } else {
            debug!(
                task = %task.id,
                requirement = requirement_id,
                "task references an unknown requirement; no link emitted"
            );
        }
    }

    // Endpoint check against the actual node set. Links are built from the
    // same records the nodes came from, so this normally drops nothing, but
    // the no-dangling invariant is enforced here rather than assumed.
    let node_refs: HashSet<NodeRef> = nodes.iter().map(GraphNode::node_ref).collect();
    let before = links.len();
    links.retain(|link| node_refs.contains(&link.from) && node_refs.contains(&link.to));
    if links.len() < before {
        debug!(dropped = before - links.len(), "dropped dangling links");
    }

    links
}

fn attributed_link(
    source_id: String,
    to_kind: NodeKind,
    to_id: &str,
    quote: Option<&str>,
) -> TraceLink {
    let link = TraceLink::new(
        NodeRef::new(NodeKind::Source, source_id),
        NodeRef::new(to_kind, to_id),
    );
    match quote.map(str::trim) {
        Some(quote) if !quote.is_empty() => link.with_excerpt(quote),
        _ => link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AmbiguityPolicy;
    use crate::resolver::AttributionResolver;
    use reqtrace_domain::{ExtractedItem, RawSourceEntry};

    fn brd_with_requirement(source: Option<&str>, quote: Option<&str>) -> BrdRecord {
        BrdRecord {
            raw_sources: vec![RawSourceEntry {
                kind: Some("email".to_string()),
                ..Default::default()
            }],
            functional_requirements: vec![ExtractedItem {
                id: "FR-1".to_string(),
                description: "Export reports".to_string(),
                source: source.map(String::from),
                source_quote: quote.map(String::from),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn build(brd: &BrdRecord, tasks: &[TaskRecord]) -> (Vec<GraphNode>, Vec<TraceLink>) {
        let registry = SourceRegistry::from_entries(&brd.raw_sources);
        let resolver = AttributionResolver::new(AmbiguityPolicy::FirstSource);
        let objective_attrs = resolver.resolve_all(&registry, &brd.business_objectives);
        let requirement_attrs = resolver.resolve_all(&registry, brd.requirements());
        let nodes = collect_nodes(&registry, brd, tasks, 80);
        let links = build_links(brd, &objective_attrs, &requirement_attrs, tasks, &nodes);
        (nodes, links)
    }

    #[test]
    fn test_source_to_requirement_link_with_excerpt() {
        let brd = brd_with_requirement(Some("email"), Some("we need exports"));
        let (_, links) = build(&brd, &[]);

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, NodeRef::new(NodeKind::Source, "SRC-1"));
        assert_eq!(links[0].to, NodeRef::new(NodeKind::Requirement, "FR-1"));
        assert_eq!(links[0].excerpt.as_deref(), Some("we need exports"));
    }

    #[test]
    fn test_empty_quote_yields_no_excerpt() {
        let brd = brd_with_requirement(Some("email"), Some("   "));
        let (_, links) = build(&brd, &[]);
        assert!(links[0].excerpt.is_none());
    }

    #[test]
    fn test_requirement_to_task_link() {
        let brd = brd_with_requirement(Some("email"), None);
        let tasks = vec![TaskRecord {
            id: "t1".to_string(),
            title: "Build exporter".to_string(),
            requirement_id: Some("FR-1".to_string()),
            status: "todo".to_string(),
        }];
        let (_, links) = build(&brd, &tasks);

        assert_eq!(links.len(), 2);
        assert_eq!(links[1].from, NodeRef::new(NodeKind::Requirement, "FR-1"));
        assert_eq!(links[1].to, NodeRef::new(NodeKind::Task, "t1"));
    }

    #[test]
    fn test_orphan_task_emits_no_link() {
        let brd = brd_with_requirement(Some("email"), None);
        let tasks = vec![TaskRecord {
            id: "t1".to_string(),
            title: "Stray".to_string(),
            requirement_id: Some("FR-99".to_string()),
            status: "todo".to_string(),
        }];
        let (nodes, links) = build(&brd, &tasks);

        // The task is still a node; it just has no inbound link
        assert!(nodes.iter().any(|n| n.kind == NodeKind::Task && n.id == "t1"));
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_task_without_requirement_reference() {
        let brd = brd_with_requirement(Some("email"), None);
        let tasks = vec![TaskRecord {
            id: "t1".to_string(),
            title: "Unlinked".to_string(),
            requirement_id: None,
            status: "todo".to_string(),
        }];
        let (_, links) = build(&brd, &tasks);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_no_dangling_endpoints() {
        let brd = brd_with_requirement(Some("email"), None);
        let tasks = vec![TaskRecord {
            id: "t1".to_string(),
            title: "Task".to_string(),
            requirement_id: Some("FR-1".to_string()),
            status: "todo".to_string(),
        }];
        let (nodes, links) = build(&brd, &tasks);

        let refs: HashSet<NodeRef> = nodes.iter().map(GraphNode::node_ref).collect();
        for link in &links {
            assert!(refs.contains(&link.from));
            assert!(refs.contains(&link.to));
        }
    }

    #[test]
    fn test_label_truncation() {
        assert_eq!(truncate_label("short", 80), "short");
        let long = "x".repeat(100);
        let truncated = truncate_label(&long, 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_link_emission_order() {
        let brd = BrdRecord {
            raw_sources: vec![RawSourceEntry {
                kind: Some("email".to_string()),
                ..Default::default()
            }],
            business_objectives: vec![ExtractedItem {
                id: "BO-1".to_string(),
                description: "Grow revenue".to_string(),
                ..Default::default()
            }],
            functional_requirements: vec![ExtractedItem {
                id: "FR-1".to_string(),
                description: "Export".to_string(),
                ..Default::default()
            }],
            non_functional_requirements: vec![ExtractedItem {
                id: "NFR-1".to_string(),
                description: "Fast".to_string(),
                ..Default::default()
            }],
        };
        let tasks = vec![TaskRecord {
            id: "t1".to_string(),
            title: "Task".to_string(),
            requirement_id: Some("NFR-1".to_string()),
            status: "todo".to_string(),
        }];
        let (_, links) = build(&brd, &tasks);

        let kinds: Vec<(NodeKind, NodeKind)> =
            links.iter().map(|l| (l.from.kind, l.to.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (NodeKind::Source, NodeKind::Objective),
                (NodeKind::Source, NodeKind::Requirement),
                (NodeKind::Source, NodeKind::Requirement),
                (NodeKind::Requirement, NodeKind::Task),
            ]
        );
    }
}
