//! Topic graph model.
//!
//! A [`Graph`] is the value handed from extraction to layout and ordering:
//! an ordered list of [`Topic`] nodes and a list of directed [`Edge`]s. A
//! graph produced by [`crate::builder::build`] guarantees that every edge
//! references nodes of the same graph and that no edge is a self-loop.

use std::fmt;

use crate::identifier::Id;

/// Role of a topic within the graph.
///
/// At most one topic per graph is [`TopicKind::Core`]. Layouts may ignore
/// the distinction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TopicKind {
    /// The central subject in "core + children" mode.
    Core,
    #[default]
    Topic,
}

impl fmt::Display for TopicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Topic => write!(f, "topic"),
        }
    }
}

/// A single extracted concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: Id,
    label: String,
    kind: TopicKind,
}

impl Topic {
    /// Creates a regular topic whose id is derived from `label`.
    ///
    /// # Examples
    ///
    /// ```
    /// use conceptmap_core::topic::{Topic, TopicKind};
    ///
    /// let topic = Topic::new(" Routing ");
    /// assert_eq!(topic.id(), "Routing");
    /// assert_eq!(topic.label(), "Routing");
    /// assert_eq!(topic.kind(), TopicKind::Topic);
    /// ```
    pub fn new(label: &str) -> Self {
        let id = Id::from_label(label);
        Self {
            id,
            label: id.to_string(),
            kind: TopicKind::Topic,
        }
    }

    /// Creates a topic with an explicit id, label and kind.
    pub fn with_parts(id: Id, label: impl Into<String>, kind: TopicKind) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
        }
    }

    /// Returns this topic with a different kind.
    pub fn with_kind(mut self, kind: TopicKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> TopicKind {
        self.kind
    }

    /// Returns true if this is the core topic
    pub fn is_core(&self) -> bool {
        self.kind == TopicKind::Core
    }
}

/// Directed relationship between two topics, used for visual linkage only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    from: Id,
    to: Id,
}

impl Edge {
    pub fn new(from: Id, to: Id) -> Self {
        Self { from, to }
    }

    /// Creates an edge between the ids derived from two labels.
    pub fn between(from_label: &str, to_label: &str) -> Self {
        Self::new(Id::from_label(from_label), Id::from_label(to_label))
    }

    pub fn from(&self) -> Id {
        self.from
    }

    pub fn to(&self) -> Id {
        self.to
    }

    /// Returns true if both endpoints are the same node
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered topic nodes plus the edges between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Topic>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph from parts without validation.
    ///
    /// Use [`crate::builder::build`] to obtain a graph with the invariants
    /// described in the [module documentation](self).
    pub(crate) fn from_parts(nodes: Vec<Topic>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Returns the empty graph
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Topic] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: Id) -> Option<&Topic> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.node(id).is_some()
    }

    /// Returns the core topic, if the graph has one
    pub fn core(&self) -> Option<&Topic> {
        self.nodes.iter().find(|node| node.is_core())
    }

    /// Returns the labels of all nodes in order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(Topic::label)
    }

    /// Returns true if the graph has an edge `from -> to`
    pub fn has_edge(&self, from: Id, to: Id) -> bool {
        self.edges.iter().any(|edge| edge.from == from && edge.to == to)
    }
}
