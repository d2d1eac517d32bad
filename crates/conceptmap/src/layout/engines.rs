//! Layout engine factory
//!
//! Engines implement [`RadialEngine`] and are selected by [`LayoutPolicy`].
//! The [`EngineBuilder`] caches one engine per policy and turns a graph into
//! a complete [`Layout`], curved links included.

mod dual_ring;
mod single_ring;

use std::collections::HashMap;

use log::{debug, info};

use conceptmap_core::{geometry::Size, topic::Graph};

use crate::layout::{DEFAULT_CURVATURE, Layout, LayoutPolicy, PlacedNode, curve_links};

/// Interface of ring placement engines.
pub trait RadialEngine {
    /// Positions every node of `graph` on `canvas`, in graph order.
    ///
    /// Implementations must place every node exactly once, keep positions
    /// inside the canvas, put a single node at the canvas center and return
    /// nothing for an empty graph.
    fn place(&self, graph: &Graph, canvas: Size) -> Vec<PlacedNode>;
}

/// Builder for creating layout engines and running them.
pub struct EngineBuilder {
    engines: HashMap<LayoutPolicy, Box<dyn RadialEngine>>,
    curvature: f32,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            engines: HashMap::new(),
            curvature: DEFAULT_CURVATURE,
        }
    }
}

impl EngineBuilder {
    /// Create a new engine builder with the default curvature
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the control point offset used for curved links
    pub fn with_curvature(mut self, curvature: f32) -> Self {
        self.curvature = curvature;
        self
    }

    /// Get the engine for `policy`, creating it on first use
    pub fn engine(&mut self, policy: LayoutPolicy) -> &dyn RadialEngine {
        let engine = self.engines.entry(policy).or_insert_with(|| {
            let engine: Box<dyn RadialEngine> = match policy {
                LayoutPolicy::SingleRing => Box::new(single_ring::Engine::new()),
                LayoutPolicy::DualRing => Box::new(dual_ring::Engine::new()),
            };
            engine
        });
        &**engine
    }

    /// Lays out `graph` on `canvas` with the engine for `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use conceptmap::{
    ///     geometry::{Point, Size},
    ///     layout::{EngineBuilder, LayoutPolicy},
    ///     topic::Topic,
    ///     builder,
    /// };
    ///
    /// let graph = builder::build([Topic::new("Recursion")], []);
    /// let layout = EngineBuilder::new().build(LayoutPolicy::DualRing, &graph, Size::new(800.0, 600.0));
    ///
    /// assert_eq!(layout.nodes()[0].position(), Point::new(400.0, 300.0));
    /// ```
    pub fn build(&mut self, policy: LayoutPolicy, graph: &Graph, canvas: Size) -> Layout {
        info!(policy:% = policy, nodes = graph.node_count(); "Calculating layout");

        if graph.is_empty() {
            debug!("Empty graph, returning empty layout");
            return Layout::empty(canvas);
        }

        let curvature = self.curvature;
        let nodes = self.engine(policy).place(graph, canvas);
        let links = curve_links(&nodes, graph.edges(), curvature);

        Layout::new(canvas, nodes, links)
    }
}

#[cfg(test)]
mod tests {
    use conceptmap_core::{
        builder,
        geometry::Point,
        identifier::Id,
        topic::{Edge, Topic, TopicKind},
    };

    use super::*;

    fn graph_of(labels: &[&str]) -> Graph {
        builder::build(labels.iter().map(|label| Topic::new(label)), [])
    }

    #[test]
    fn test_empty_graph_gives_empty_layout() {
        let canvas = Size::new(900.0, 640.0);
        for policy in [LayoutPolicy::SingleRing, LayoutPolicy::DualRing] {
            let layout = EngineBuilder::new().build(policy, &Graph::empty(), canvas);
            assert!(layout.is_empty());
            assert!(layout.links().is_empty());
            assert_eq!(layout.canvas(), canvas);
        }
    }

    #[test]
    fn test_single_node_centered_for_every_policy() {
        let canvas = Size::new(900.0, 640.0);
        for policy in [LayoutPolicy::SingleRing, LayoutPolicy::DualRing] {
            let layout = EngineBuilder::new().build(policy, &graph_of(&["X"]), canvas);
            assert_eq!(layout.nodes().len(), 1);
            assert_eq!(layout.nodes()[0].position(), Point::new(450.0, 320.0));
            assert_eq!(layout.nodes()[0].ring(), PlacedNode::CENTER);
        }
    }

    #[test]
    fn test_links_follow_edges() {
        let graph = builder::build(
            ["A", "B", "C"].map(Topic::new),
            [Edge::between("A", "B"), Edge::between("B", "C")],
        );
        let layout =
            EngineBuilder::new().build(LayoutPolicy::DualRing, &graph, Size::new(500.0, 500.0));

        assert_eq!(layout.links().len(), 2);
        let first = layout.links()[0];
        assert_eq!(first.start(), layout.node(first.edge().from()).unwrap().position());
        assert_eq!(first.end(), layout.node(first.edge().to()).unwrap().position());
    }

    #[test]
    fn test_engine_is_cached_per_policy() {
        let mut builder = EngineBuilder::new();
        builder.engine(LayoutPolicy::SingleRing);
        builder.engine(LayoutPolicy::SingleRing);
        builder.engine(LayoutPolicy::DualRing);
        assert_eq!(builder.engines.len(), 2);
    }

    #[test]
    fn test_core_honored_only_by_single_ring() {
        let graph = builder::build(
            [
                Topic::new("A"),
                Topic::new("Core").with_kind(TopicKind::Core),
                Topic::new("B"),
            ],
            [],
        );
        let canvas = Size::new(600.0, 600.0);

        let single = EngineBuilder::new().build(LayoutPolicy::SingleRing, &graph, canvas);
        let core = single.node(Id::new("Core")).unwrap();
        assert_eq!(core.position(), canvas.center());
        assert_eq!(core.ring(), PlacedNode::CENTER);

        let dual = EngineBuilder::new().build(LayoutPolicy::DualRing, &graph, canvas);
        assert_ne!(dual.node(Id::new("Core")).unwrap().position(), canvas.center());
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use conceptmap_core::{builder, topic::Topic};

    use super::*;

    fn check_layout_covers_graph_within_canvas(
        count: usize,
        width: f32,
        height: f32,
        policy: LayoutPolicy,
    ) -> Result<(), TestCaseError> {
        let graph = builder::build((0..count).map(|i| Topic::new(&format!("Topic {i}"))), []);
        let canvas = Size::new(width, height);
        let layout = EngineBuilder::new().build(policy, &graph, canvas);

        let bounds = layout.bounds().expand(1e-3);

        prop_assert_eq!(layout.nodes().len(), graph.node_count());
        for (placed, topic) in layout.nodes().iter().zip(graph.nodes()) {
            prop_assert_eq!(placed.id(), topic.id());
            prop_assert!(bounds.contains(placed.position()), "{:?}", placed.position());
            prop_assert!(placed.ring() <= PlacedNode::OUTER);
        }
        Ok(())
    }

    fn policy_strategy() -> impl Strategy<Value = LayoutPolicy> {
        prop_oneof![Just(LayoutPolicy::SingleRing), Just(LayoutPolicy::DualRing)]
    }

    proptest! {
        #[test]
        fn layout_covers_graph_within_canvas(
            count in 0usize..40,
            width in 1.0f32..2000.0,
            height in 1.0f32..2000.0,
            policy in policy_strategy(),
        ) {
            check_layout_covers_graph_within_canvas(count, width, height, policy)?;
        }
    }
}
