//! Dual ring layout engine
//!
//! The first `ceil(0.6 * n)` topics go on an outer ring and the rest on an
//! inner ring of proportional radius. Both rings start at the top of the
//! canvas; the inner ring is rotated by half a slot so its nodes fall between
//! those of the outer ring. Core topics get no special treatment.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use log::debug;

use conceptmap_core::{
    geometry::{Point, Size},
    topic::Graph,
};

use crate::layout::{PlacedNode, engines::RadialEngine};

/// Dual ring engine
pub struct Engine {
    /// Share of the topics placed on the outer ring, as `(numerator, denominator)`.
    outer_share: (usize, usize),
    outer_radius_factor: f32,
    inner_radius_ratio: f32,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            outer_share: (3, 5),
            outer_radius_factor: 0.42,
            inner_radius_ratio: 0.62,
        }
    }

    fn outer_count(&self, node_count: usize) -> usize {
        let (numerator, denominator) = self.outer_share;
        (node_count * numerator).div_ceil(denominator).min(node_count)
    }
}

/// Angle of `slot` among `count` evenly spaced slots, starting at the top.
fn slot_angle(slot: usize, count: usize, rotation: f32) -> f32 {
    -FRAC_PI_2 + rotation + TAU * slot as f32 / count as f32
}

impl RadialEngine for Engine {
    fn place(&self, graph: &Graph, canvas: Size) -> Vec<PlacedNode> {
        let center = canvas.center();
        let nodes = graph.nodes();

        if nodes.len() == 1 {
            return vec![PlacedNode::new(nodes[0].clone(), center, PlacedNode::CENTER)];
        }

        let outer_count = self.outer_count(nodes.len());
        let inner_count = nodes.len() - outer_count;
        let outer_radius = self.outer_radius_factor * canvas.min_side();
        let inner_radius = self.inner_radius_ratio * outer_radius;
        debug!(outer_count, inner_count, outer_radius, inner_radius; "Dual ring placement");

        let outer = nodes[..outer_count].iter().enumerate().map(|(slot, topic)| {
            let position =
                Point::from_polar(center, outer_radius, slot_angle(slot, outer_count, 0.0));
            PlacedNode::new(topic.clone(), position, PlacedNode::OUTER)
        });

        let rotation = if inner_count > 0 {
            PI / inner_count as f32
        } else {
            0.0
        };
        let inner = nodes[outer_count..].iter().enumerate().map(|(slot, topic)| {
            let position =
                Point::from_polar(center, inner_radius, slot_angle(slot, inner_count, rotation));
            PlacedNode::new(topic.clone(), position, PlacedNode::INNER)
        });

        outer.chain(inner).collect()
    }
}
