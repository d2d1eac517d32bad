//! Suggested study order.
//!
//! Topics with fewer connections are treated as more self-contained and come
//! first; ties are broken by label so the order is stable across runs.

use std::fmt;

use log::{debug, trace};

use conceptmap_core::topic::Graph;

use crate::structure::TopicGraph;

/// One entry of a [`LearningPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningStep {
    position: usize,
    label: String,
}

impl LearningStep {
    /// 1-based position in the path
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for LearningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.position, self.label)
    }
}

/// Ordered list of topics to study.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearningPath {
    steps: Vec<LearningStep>,
}

impl LearningPath {
    pub fn steps(&self) -> &[LearningStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Topic labels in study order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(LearningStep::label)
    }

    /// Steps rendered as `"N. label"`.
    pub fn numbered(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for LearningPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Orders the topics of `graph` by ascending degree, then by label.
///
/// Labels are compared by bytes, so uppercase sorts before lowercase.
///
/// # Examples
///
/// ```
/// use conceptmap::{builder, path, topic::{Edge, Topic}};
///
/// let graph = builder::build(
///     ["A", "B", "C"].map(Topic::new),
///     [Edge::between("A", "B"), Edge::between("A", "C")],
/// );
///
/// let path = path::order(&graph);
/// assert_eq!(path.numbered(), vec!["1. B", "2. C", "3. A"]);
/// ```
pub fn order(graph: &Graph) -> LearningPath {
    let view = TopicGraph::from_graph(graph);

    let mut ranked: Vec<(usize, &str)> = view
        .degrees()
        .map(|(topic, degree)| (degree, topic.label()))
        .collect();
    ranked.sort_unstable();
    trace!(ranked:?; "Topics ranked by degree");

    let steps: Vec<LearningStep> = ranked
        .into_iter()
        .enumerate()
        .map(|(idx, (_, label))| LearningStep {
            position: idx + 1,
            label: label.to_string(),
        })
        .collect();

    debug!(steps = steps.len(); "Learning path ordered");
    LearningPath { steps }
}
