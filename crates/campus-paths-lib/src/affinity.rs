//! Affinity graphs built from shared-label memberships.
//!
//! Each membership row says that an entity carries a label (a character
//! appearing in a book, a person on a project, ...). Entities that share
//! labels are linked, and the more labels they share the cheaper the link.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, Node};
use crate::location::Distance;

/// One `(entity, label)` row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Membership {
    pub entity: String,
    pub label: String,
}

impl Membership {
    pub fn new(entity: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            label: label.into(),
        }
    }
}

/// Build the unweighted multigraph where every pair of entities sharing a
/// label is connected in both directions by an edge carrying that label.
///
/// Repeated rows for the same entity and label count once.
pub fn build_label_graph(memberships: &[Membership]) -> Result<Graph<String, String>> {
    let mut entities: BTreeSet<&str> = BTreeSet::new();
    let mut members_by_label: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for membership in memberships {
        entities.insert(&membership.entity);
        members_by_label
            .entry(&membership.label)
            .or_default()
            .insert(&membership.entity);
    }

    let mut graph = Graph::from_nodes(entities.iter().map(|entity| Node::new(entity.to_string())));

    for (label, members) in &members_by_label {
        let members: Vec<&str> = members.iter().copied().collect();
        for (index, start) in members.iter().enumerate() {
            for end in &members[index + 1..] {
                graph.add_edge(&start.to_string(), end.to_string(), label.to_string())?;
                graph.add_edge(&end.to_string(), start.to_string(), label.to_string())?;
            }
        }
    }

    debug!(
        entities = graph.len(),
        labels = members_by_label.len(),
        edges = graph.edge_count(),
        "built label graph"
    );
    Ok(graph)
}

/// Collapse a label graph into a weighted graph with one edge per direction
/// for each connected pair, weighted `1 / shared label count`.
pub fn weigh_label_graph(labels: &Graph<String, String>) -> Result<Graph<String, Distance>> {
    let mut weighted =
        Graph::from_nodes(labels.nodes().map(|node| Node::new(node.key().clone())));

    for node in labels.nodes() {
        for child in node.children().filter(|child| *child > node.key()) {
            let shared = node.edges_to(child).map(|edges| edges.len()).unwrap_or(0);
            if shared == 0 {
                continue;
            }
            let cost = Distance::new(1.0 / shared as f64);
            weighted.add_edge(node.key(), child.clone(), cost)?;
            weighted.add_edge(child, node.key().clone(), cost)?;
        }
    }

    Ok(weighted)
}

/// Build the search-ready affinity graph straight from membership rows.
pub fn build_graph(memberships: &[Membership]) -> Result<Graph<String, Distance>> {
    let labels = build_label_graph(memberships)?;
    weigh_label_graph(&labels)
}
