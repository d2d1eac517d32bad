//! Undirected view of a topic graph.
//!
//! Wraps a [`Graph`] in a petgraph [`UnGraph`] so structural queries such as
//! node degree can use petgraph's adjacency instead of scanning the edge
//! list per node.

use std::collections::HashMap;

use log::trace;
use petgraph::graph::{NodeIndex, UnGraph};

use conceptmap_core::{
    identifier::Id,
    topic::{Graph, Topic},
};

/// Undirected adjacency over the topics of a [`Graph`].
#[derive(Debug)]
pub(crate) struct TopicGraph<'a> {
    graph: UnGraph<&'a Topic, ()>,
    indices: HashMap<Id, NodeIndex>,
}

impl<'a> TopicGraph<'a> {
    /// Builds the undirected view, keeping node insertion order.
    ///
    /// Edges with an endpoint that is not a node of `graph` are skipped.
    pub(crate) fn from_graph(graph: &'a Graph) -> Self {
        let mut inner = UnGraph::with_capacity(graph.node_count(), graph.edges().len());
        let mut indices = HashMap::with_capacity(graph.node_count());

        for topic in graph.nodes() {
            let idx = inner.add_node(topic);
            indices.insert(topic.id(), idx);
        }

        for edge in graph.edges() {
            if let (Some(&from), Some(&to)) = (indices.get(&edge.from()), indices.get(&edge.to()))
            {
                inner.add_edge(from, to, ());
            } else {
                trace!(from:% = edge.from(), to:% = edge.to(); "Skipping edge with unknown endpoint");
            }
        }

        Self {
            graph: inner,
            indices,
        }
    }

    /// Number of edges touching `id`, in either direction.
    pub(crate) fn degree(&self, id: Id) -> usize {
        self.indices
            .get(&id)
            .map_or(0, |&idx| self.graph.edges(idx).count())
    }

    /// Topics with their degree, in graph order.
    pub(crate) fn degrees(&self) -> impl Iterator<Item = (&'a Topic, usize)> + '_ {
        self.graph
            .node_weights()
            .map(move |topic| (*topic, self.degree(topic.id())))
    }
}
