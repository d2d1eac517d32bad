//! Single ring layout engine
//!
//! Places the core topic, if any, at the canvas center and spreads every
//! other topic evenly on one circle starting at angle 0.

use std::f32::consts::TAU;

use log::debug;

use conceptmap_core::{
    geometry::{Point, Size},
    topic::Graph,
};

use crate::layout::{PlacedNode, engines::RadialEngine};

/// Ring radius relative to the shorter canvas side
const RADIUS_FACTOR: f32 = 0.3;

/// Single ring engine
pub struct Engine {
    radius_factor: f32,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            radius_factor: RADIUS_FACTOR,
        }
    }
}

impl RadialEngine for Engine {
    fn place(&self, graph: &Graph, canvas: Size) -> Vec<PlacedNode> {
        let center = canvas.center();

        if graph.node_count() == 1 {
            let topic = graph.nodes()[0].clone();
            return vec![PlacedNode::new(topic, center, PlacedNode::CENTER)];
        }

        let core_id = graph.core().map(|core| core.id());
        let ring_count = graph.node_count() - usize::from(core_id.is_some());
        let radius = self.radius_factor * canvas.min_side();
        debug!(ring_count, radius, has_core = core_id.is_some(); "Single ring placement");

        let mut slot = 0;
        graph
            .nodes()
            .iter()
            .map(|topic| {
                if Some(topic.id()) == core_id {
                    return PlacedNode::new(topic.clone(), center, PlacedNode::CENTER);
                }
                let angle = TAU * slot as f32 / ring_count as f32;
                slot += 1;
                PlacedNode::new(
                    topic.clone(),
                    Point::from_polar(center, radius, angle),
                    PlacedNode::INNER,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use conceptmap_core::{
        builder,
        topic::{Topic, TopicKind},
    };

    use super::*;

    #[test]
    fn test_ring_starts_at_angle_zero() {
        let graph = builder::build(["A", "B", "C", "D"].map(Topic::new), []);
        let nodes = Engine::new().place(&graph, Size::new(1000.0, 500.0));

        // Radius is 0.3 * 500 around (500, 250).
        assert_approx_eq!(f32, nodes[0].position().x(), 650.0, epsilon = 1e-3);
        assert_approx_eq!(f32, nodes[0].position().y(), 250.0, epsilon = 1e-3);
        assert_approx_eq!(f32, nodes[1].position().x(), 500.0, epsilon = 1e-3);
        assert_approx_eq!(f32, nodes[1].position().y(), 400.0, epsilon = 1e-3);
        assert!(nodes.iter().all(|n| n.ring() == PlacedNode::INNER));
    }

    #[test]
    fn test_core_in_center_others_on_ring() {
        let graph = builder::build(
            [
                Topic::new("Root").with_kind(TopicKind::Core),
                Topic::new("Left"),
                Topic::new("Right"),
            ],
            [],
        );
        let nodes = Engine::new().place(&graph, Size::new(200.0, 200.0));

        assert_eq!(nodes[0].position(), Point::new(100.0, 100.0));
        assert_eq!(nodes[0].ring(), PlacedNode::CENTER);
        assert_approx_eq!(f32, nodes[1].position().x(), 160.0, epsilon = 1e-3);
        assert_approx_eq!(f32, nodes[2].position().x(), 40.0, epsilon = 1e-3);
    }
}
