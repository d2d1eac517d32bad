//! Radial placement of topic graphs.
//!
//! The layout stage turns a [`Graph`] into positioned nodes and curved links
//! on a fixed canvas. How nodes are spread over rings is decided by a
//! [`LayoutPolicy`]; each policy is implemented by an engine behind the
//! [`RadialEngine`] trait and obtained from an [`EngineBuilder`].

mod engines;

pub use engines::{EngineBuilder, RadialEngine};

use std::{collections::HashMap, fmt, str::FromStr};

use log::{debug, warn};
use serde::Deserialize;

use conceptmap_core::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
    topic::{Edge, Topic},
};

/// Default control point offset of curved links, in canvas units.
pub const DEFAULT_CURVATURE: f32 = 28.0;

/// Ring placement strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPolicy {
    /// One ring around the canvas center, with the core topic in the middle.
    SingleRing,
    /// An outer ring with most topics and a rotated inner ring with the rest.
    #[default]
    DualRing,
}

impl FromStr for LayoutPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_ring" => Ok(Self::SingleRing),
            "dual_ring" => Ok(Self::DualRing),
            _ => Err("Unsupported layout policy"),
        }
    }
}

impl From<LayoutPolicy> for &'static str {
    fn from(val: LayoutPolicy) -> Self {
        match val {
            LayoutPolicy::SingleRing => "single_ring",
            LayoutPolicy::DualRing => "dual_ring",
        }
    }
}

impl fmt::Display for LayoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A topic with its position on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    topic: Topic,
    position: Point,
    ring: u32,
}

impl PlacedNode {
    /// Ring index of the canvas center.
    pub const CENTER: u32 = 0;
    /// Ring index of the innermost (or only) ring.
    pub const INNER: u32 = 1;
    /// Ring index of the outer ring.
    pub const OUTER: u32 = 2;

    pub fn new(topic: Topic, position: Point, ring: u32) -> Self {
        Self {
            topic,
            position,
            ring,
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn id(&self) -> Id {
        self.topic.id()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Ring the node was placed on: 0 for the center, 1 for the inner ring
    /// and 2 for the outer ring.
    pub fn ring(&self) -> u32 {
        self.ring
    }
}

/// An edge drawn as a quadratic Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvedLink {
    edge: Edge,
    start: Point,
    control: Point,
    end: Point,
}

impl CurvedLink {
    /// Curves the segment `start`-`end` by offsetting its midpoint along the
    /// unit perpendicular by `curvature`.
    ///
    /// A zero-length segment keeps its midpoint as the control point.
    ///
    /// # Examples
    ///
    /// ```
    /// use conceptmap::{geometry::Point, layout::CurvedLink, topic::Edge};
    ///
    /// let link = CurvedLink::new(
    ///     Edge::between("A", "B"),
    ///     Point::new(0.0, 0.0),
    ///     Point::new(100.0, 0.0),
    ///     28.0,
    /// );
    /// assert_eq!(link.control(), Point::new(50.0, 28.0));
    /// assert_eq!(link.path_data(), "M 0 0 Q 50 28 100 0");
    /// ```
    pub fn new(edge: Edge, start: Point, end: Point, curvature: f32) -> Self {
        let midpoint = start.midpoint(end);
        let control = match end.sub_point(start).unit_normal() {
            Some(normal) => midpoint.add_point(normal.scale(curvature)),
            None => midpoint,
        };

        Self {
            edge,
            start,
            control,
            end,
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn control(&self) -> Point {
        self.control
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// SVG path data of the curve: `M x1 y1 Q cx cy x2 y2`.
    pub fn path_data(&self) -> String {
        format!(
            "M {} {} Q {} {} {} {}",
            self.start.x(),
            self.start.y(),
            self.control.x(),
            self.control.y(),
            self.end.x(),
            self.end.y()
        )
    }
}

/// Positioned nodes and curved links for one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    canvas: Size,
    nodes: Vec<PlacedNode>,
    links: Vec<CurvedLink>,
}

impl Layout {
    pub fn new(canvas: Size, nodes: Vec<PlacedNode>, links: Vec<CurvedLink>) -> Self {
        Self {
            canvas,
            nodes,
            links,
        }
    }

    /// An empty layout on `canvas`.
    pub fn empty(canvas: Size) -> Self {
        Self::new(canvas, Vec::new(), Vec::new())
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Placed nodes, in graph order
    pub fn nodes(&self) -> &[PlacedNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[CurvedLink] {
        &self.links
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds the placed node for `id`.
    pub fn node(&self, id: Id) -> Option<&PlacedNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Bounds of the canvas, anchored at the origin.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::default(), self.canvas)
    }
}

/// Builds one [`CurvedLink`] per edge whose endpoints are both placed.
///
/// Edges with an endpoint missing from `nodes` are dropped and logged.
pub fn curve_links(nodes: &[PlacedNode], edges: &[Edge], curvature: f32) -> Vec<CurvedLink> {
    let positions: HashMap<Id, Point> = nodes
        .iter()
        .map(|node| (node.id(), node.position()))
        .collect();

    let links: Vec<CurvedLink> = edges
        .iter()
        .filter_map(|edge| {
            match (positions.get(&edge.from()), positions.get(&edge.to())) {
                (Some(&start), Some(&end)) => Some(CurvedLink::new(*edge, start, end, curvature)),
                _ => {
                    warn!(from:% = edge.from(), to:% = edge.to(); "Dropping link with unplaced endpoint");
                    None
                }
            }
        })
        .collect();

    debug!(links = links.len(), edges = edges.len(); "Links curved");
    links
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn placed(label: &str, x: f32, y: f32) -> PlacedNode {
        PlacedNode::new(Topic::new(label), Point::new(x, y), PlacedNode::INNER)
    }

    #[test]
    fn test_policy_from_str_and_display() {
        assert_eq!("single_ring".parse(), Ok(LayoutPolicy::SingleRing));
        assert_eq!("dual_ring".parse(), Ok(LayoutPolicy::DualRing));
        assert!("spiral".parse::<LayoutPolicy>().is_err());
        assert_eq!(LayoutPolicy::SingleRing.to_string(), "single_ring");
        assert_eq!(LayoutPolicy::default(), LayoutPolicy::DualRing);
    }

    #[test]
    fn test_curved_link_perpendicular_offset() {
        let link = CurvedLink::new(
            Edge::between("A", "B"),
            Point::new(10.0, 10.0),
            Point::new(10.0, 110.0),
            20.0,
        );
        // Direction (0, 100) has normal (-1, 0).
        assert_approx_eq!(f32, link.control().x(), -10.0);
        assert_approx_eq!(f32, link.control().y(), 60.0);
    }

    #[test]
    fn test_zero_length_link_uses_midpoint() {
        let p = Point::new(42.0, 7.0);
        let link = CurvedLink::new(Edge::between("A", "B"), p, p, DEFAULT_CURVATURE);
        assert_eq!(link.control(), p);
    }

    #[test]
    fn test_path_data_format() {
        let link = CurvedLink::new(
            Edge::between("A", "B"),
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            DEFAULT_CURVATURE,
        );
        assert_eq!(link.path_data(), "M 0 0 Q 0 0 0 0");
    }

    #[test]
    fn test_curve_links_drops_unplaced_endpoints() {
        let nodes = vec![placed("A", 0.0, 0.0), placed("B", 10.0, 0.0)];
        let edges = vec![
            Edge::between("A", "B"),
            Edge::between("A", "Missing"),
            Edge::between("Missing", "B"),
        ];

        let links = curve_links(&nodes, &edges, DEFAULT_CURVATURE);

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].edge(), Edge::between("A", "B"));
        assert_eq!(links[0].start(), Point::new(0.0, 0.0));
        assert_eq!(links[0].end(), Point::new(10.0, 0.0));
    }

    #[test]
    fn test_layout_lookup() {
        let layout = Layout::new(
            Size::new(100.0, 100.0),
            vec![placed("A", 1.0, 2.0)],
            Vec::new(),
        );
        assert_eq!(layout.node(Id::new("A")).map(PlacedNode::position), Some(Point::new(1.0, 2.0)));
        assert!(layout.node(Id::new("B")).is_none());
        assert!(Layout::empty(Size::new(1.0, 1.0)).is_empty());
    }
}
