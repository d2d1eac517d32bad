//! Graph normalization.
//!
//! [`build`] is the single place where raw topics and edges become a
//! [`Graph`]. It performs no extraction logic, only validation:
//!
//! - nodes are deduplicated by id; the last occurrence wins for label and
//!   kind while the first occurrence fixes the position
//! - only the first [`TopicKind::Core`] node keeps that kind
//! - edges with an unknown endpoint or with `from == to` are dropped
//! - repeated `(from, to)` pairs are dropped, keeping the first
//!
//! The pass is idempotent: building an already built graph returns an equal
//! graph.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::{
    identifier::Id,
    topic::{Edge, Graph, Topic, TopicKind},
};

/// Normalizes raw nodes and edges into a [`Graph`].
///
/// # Examples
///
/// ```
/// use conceptmap_core::{builder::build, topic::{Edge, Topic}};
///
/// let graph = build(
///     [Topic::new("Threads"), Topic::new("Sockets"), Topic::new("Threads")],
///     [
///         Edge::between("Threads", "Sockets"),
///         Edge::between("Threads", "Threads"),
///         Edge::between("Threads", "DNS"),
///     ],
/// );
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edges().len(), 1);
/// ```
pub fn build(
    raw_nodes: impl IntoIterator<Item = Topic>,
    raw_edges: impl IntoIterator<Item = Edge>,
) -> Graph {
    let mut nodes: Vec<Topic> = Vec::new();
    let mut positions: HashMap<Id, usize> = HashMap::new();

    for topic in raw_nodes {
        match positions.get(&topic.id()) {
            Some(&idx) => {
                trace!(id:% = topic.id(); "Replacing duplicate topic");
                nodes[idx] = topic;
            }
            None => {
                positions.insert(topic.id(), nodes.len());
                nodes.push(topic);
            }
        }
    }

    let mut core_seen = false;
    for node in nodes.iter_mut() {
        if node.is_core() {
            if core_seen {
                debug!(id:% = node.id(); "Demoting additional core topic");
                *node = node.clone().with_kind(TopicKind::Topic);
            }
            core_seen = true;
        }
    }

    let mut seen_edges: HashSet<Edge> = HashSet::new();
    let mut dropped = 0usize;
    let edges: Vec<Edge> = raw_edges
        .into_iter()
        .filter(|edge| {
            let valid = !edge.is_self_loop()
                && positions.contains_key(&edge.from())
                && positions.contains_key(&edge.to())
                && seen_edges.insert(*edge);
            if !valid {
                trace!(from:% = edge.from(), to:% = edge.to(); "Dropping edge");
                dropped += 1;
            }
            valid
        })
        .collect();

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        dropped_edges = dropped;
        "Graph built"
    );

    Graph::from_parts(nodes, edges)
}

/// Runs [`build`] again over the parts of an existing graph.
///
/// This exists mostly to express idempotence: `rebuild(&g) == g` for any
/// graph returned by [`build`].
pub fn rebuild(graph: &Graph) -> Graph {
    build(graph.nodes().iter().cloned(), graph.edges().iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(graph: &Graph) -> Vec<String> {
        graph.nodes().iter().map(|n| n.id().to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        let graph = build(Vec::new(), Vec::new());
        assert!(graph.is_empty());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_duplicate_nodes_keep_first_position_last_value() {
        let graph = build(
            [
                Topic::new("A"),
                Topic::new("B"),
                Topic::with_parts(Id::new("A"), "Alpha", TopicKind::Topic),
            ],
            [],
        );

        assert_eq!(ids(&graph), vec!["A", "B"]);
        assert_eq!(graph.nodes()[0].label(), "Alpha");
    }

    #[test]
    fn test_drops_self_loops_and_dangling_edges() {
        let graph = build(
            [Topic::new("A"), Topic::new("B")],
            [
                Edge::between("A", "A"),
                Edge::between("A", "Missing"),
                Edge::between("Missing", "B"),
                Edge::between("A", "B"),
            ],
        );

        assert_eq!(graph.edges(), &[Edge::between("A", "B")]);
    }

    #[test]
    fn test_duplicate_edges_are_collapsed_but_direction_matters() {
        let graph = build(
            [Topic::new("A"), Topic::new("B")],
            [
                Edge::between("A", "B"),
                Edge::between("A", "B"),
                Edge::between("B", "A"),
            ],
        );

        assert_eq!(
            graph.edges(),
            &[Edge::between("A", "B"), Edge::between("B", "A")]
        );
    }

    #[test]
    fn test_only_first_core_survives() {
        let graph = build(
            [
                Topic::new("A").with_kind(TopicKind::Core),
                Topic::new("B").with_kind(TopicKind::Core),
            ],
            [],
        );

        assert!(graph.nodes()[0].is_core());
        assert!(!graph.nodes()[1].is_core());
    }

    #[test]
    fn test_rebuild_is_identity() {
        let graph = build(
            [
                Topic::new("A"),
                Topic::new("B").with_kind(TopicKind::Core),
                Topic::new("C"),
                Topic::new("A").with_kind(TopicKind::Core),
            ],
            [
                Edge::between("A", "B"),
                Edge::between("B", "C"),
                Edge::between("C", "C"),
                Edge::between("A", "B"),
            ],
        );

        assert_eq!(rebuild(&graph), graph);
    }
}
