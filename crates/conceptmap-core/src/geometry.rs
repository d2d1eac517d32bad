//! Geometric primitives for concept-map layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate on the canvas
//! - [`Size`] - Width and height of a canvas
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! The coordinate system matches SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Angles are measured in radians from the +X axis and grow clockwise on
//! screen because Y points down, so `-π/2` is the top of a circle.

/// A 2D point on the canvas.
///
/// # Examples
///
/// ```
/// # use conceptmap_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates the point at `radius` and `angle` (radians) around `center`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use conceptmap_core::geometry::Point;
    /// let center = Point::new(100.0, 100.0);
    /// let right = Point::from_polar(center, 50.0, 0.0);
    /// assert_eq!(right, Point::new(150.0, 100.0));
    /// ```
    pub fn from_polar(center: Point, radius: f32, angle: f32) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the Euclidean length of this point taken as a vector
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the unit vector perpendicular to this vector, `(-y, x) / |v|`.
    ///
    /// A zero vector has no direction; `None` is returned for it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use conceptmap_core::geometry::Point;
    /// let normal = Point::new(10.0, 0.0).unit_normal().unwrap();
    /// assert_eq!(normal, Point::new(0.0, 1.0));
    /// assert!(Point::default().unit_normal().is_none());
    /// ```
    pub fn unit_normal(self) -> Option<Self> {
        let length = self.hypot();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(Self {
            x: -self.y / length,
            y: self.x / length,
        })
    }
}

/// Width and height of a drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the smaller of width and height
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    /// Returns the center point of a surface of this size anchored at the origin
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Axis-aligned rectangle with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the bounds grown by `margin` on every side
    pub fn expand(self, margin: f32) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Returns true if `point` lies inside the bounds, edges included
    ///
    /// # Examples
    ///
    /// ```
    /// # use conceptmap_core::geometry::{Bounds, Point, Size};
    /// let canvas = Bounds::new_from_top_left(Point::default(), Size::new(100.0, 50.0));
    /// assert!(canvas.contains(Point::new(100.0, 50.0)));
    /// assert!(!canvas.contains(Point::new(100.5, 10.0)));
    /// ```
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.0, 4.0);
        assert_eq!(point.x(), 3.0);
        assert_eq!(point.y(), 4.0);
    }

    #[test]
    fn test_point_sub() {
        let diff = Point::new(5.0, 7.0).sub_point(Point::new(2.0, 3.0));
        assert_eq!(diff, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_point_hypot() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
    }

    #[test]
    fn test_point_scale() {
        let scaled = Point::new(10.0, -20.0).scale(0.5);
        assert_eq!(scaled, Point::new(5.0, -10.0));
    }

    #[test]
    fn test_from_polar_top_of_circle() {
        let center = Point::new(50.0, 50.0);
        let top = Point::from_polar(center, 10.0, -std::f32::consts::FRAC_PI_2);
        assert!((top.x() - 50.0).abs() < 1e-4);
        assert!((top.y() - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_unit_normal_vertical() {
        // Pointing down (+Y); the normal points toward -X.
        let normal = Point::new(0.0, 4.0).unit_normal().unwrap();
        assert_eq!(normal, Point::new(-1.0, 0.0));
    }

    #[test]
    fn test_size_helpers() {
        let size = Size::new(900.0, 640.0);
        assert_eq!(size.min_side(), 640.0);
        assert_eq!(size.center(), Point::new(450.0, 320.0));
    }

    #[test]
    fn test_bounds_dimensions() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.max_x(), 40.0);
        assert_eq!(bounds.max_y(), 60.0);
        assert_eq!(bounds.width(), 30.0);
        assert_eq!(bounds.height(), 40.0);
    }

    #[test]
    fn test_bounds_expand_and_contains() {
        let bounds = Bounds::new_from_top_left(Point::default(), Size::new(10.0, 10.0));
        assert!(!bounds.contains(Point::new(-1.0, 5.0)));
        assert!(bounds.expand(2.0).contains(Point::new(-1.0, 5.0)));
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn non_zero_vector_strategy() -> impl Strategy<Value = Point> {
        point_strategy().prop_filter("vector must have length", |p| p.hypot() > 0.01)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Midpoint should always be between (or equal to) both points.
    fn check_midpoint_is_between_points(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let mid = p1.midpoint(p2);

        prop_assert!(mid.x() >= p1.x().min(p2.x()) && mid.x() <= p1.x().max(p2.x()));
        prop_assert!(mid.y() >= p1.y().min(p2.y()) && mid.y() <= p1.y().max(p2.y()));
        Ok(())
    }

    /// The unit normal has length one and is orthogonal to the vector.
    fn check_unit_normal_is_orthonormal(v: Point) -> Result<(), TestCaseError> {
        let normal = v.unit_normal().expect("non-zero vector has a normal");
        let dot = normal.x() * v.x() + normal.y() * v.y();

        prop_assert!(approx_eq!(f32, normal.hypot(), 1.0, epsilon = 1e-4));
        prop_assert!(dot.abs() <= 1e-3 * v.hypot().max(1.0));
        Ok(())
    }

    /// A point placed on a circle is at `radius` distance from the center.
    fn check_polar_distance(center: Point, radius: f32, angle: f32) -> Result<(), TestCaseError> {
        let placed = Point::from_polar(center, radius, angle);
        let distance = placed.sub_point(center).hypot();

        prop_assert!(approx_eq!(f32, distance, radius, epsilon = 1e-2));
        Ok(())
    }

    proptest! {
        #[test]
        fn midpoint_is_between_points(p1 in point_strategy(), p2 in point_strategy()) {
            check_midpoint_is_between_points(p1, p2)?;
        }

        #[test]
        fn unit_normal_is_orthonormal(v in non_zero_vector_strategy()) {
            check_unit_normal_is_orthonormal(v)?;
        }

        #[test]
        fn polar_distance_matches_radius(
            center in point_strategy(),
            radius in 0.0f32..500.0,
            angle in -10.0f32..10.0,
        ) {
            check_polar_distance(center, radius, angle)?;
        }
    }
}
