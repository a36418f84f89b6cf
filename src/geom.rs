//! Geometric primitives consumed by the tree: an immutable 2D point and an
//! axis-aligned rectangle, both with exact squared-distance predicates.
//!
//! All distance comparisons in this crate use squared Euclidean distance so
//! that pruning decisions stay exact and monotonic; no square roots are taken.

use std::cmp::Ordering;
use std::fmt;

/// An immutable point in the plane.
///
/// Points are totally ordered, lexicographically by `(x, y)` using
/// [`f64::total_cmp`], so they can key ordered collections such as a
/// `BTreeSet`. For the finite coordinates the tree stores this is the usual
/// numeric order; the one visible quirk of the total order is that `-0.0`
/// and `0.0` are distinct points, with `-0.0` sorting first.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns whether both coordinates are finite (not NaN, not infinite).
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared Euclidean distance to another point.
    ///
    /// # Examples
    /// ```
    /// use kd2d::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.distance_squared_to(b), 25.0);
    /// ```
    pub fn distance_squared_to(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Lexicographic order by `(x, y)`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle `[xmin, xmax] x [ymin, ymax]`.
///
/// Boundaries are inclusive for every predicate: a point on an edge is
/// contained, and two rectangles sharing only an edge intersect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Minimum x-coordinate.
    pub xmin: f64,
    /// Minimum y-coordinate.
    pub ymin: f64,
    /// Maximum x-coordinate.
    pub xmax: f64,
    /// Maximum y-coordinate.
    pub ymax: f64,
}

impl Rect {
    /// The unit square `[0, 1] x [0, 1]`, the default tree domain.
    pub const UNIT: Self = Self {
        xmin: 0.0,
        ymin: 0.0,
        xmax: 1.0,
        ymax: 1.0,
    };

    /// Creates a rectangle from its corner coordinates.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self { xmin, ymin, xmax, ymax }
    }

    /// Returns whether the rectangle is finite and non-inverted
    /// (`xmin <= xmax` and `ymin <= ymax`; zero width or height is allowed).
    pub fn is_valid(&self) -> bool {
        self.xmin.is_finite()
            && self.ymin.is_finite()
            && self.xmax.is_finite()
            && self.ymax.is_finite()
            && self.xmin <= self.xmax
            && self.ymin <= self.ymax
    }

    /// Returns whether the point lies inside the rectangle or on its boundary.
    ///
    /// # Examples
    /// ```
    /// use kd2d::{Point, Rect};
    ///
    /// let r = Rect::new(0.0, 0.0, 0.5, 0.5);
    /// assert!(r.contains(Point::new(0.5, 0.4)));
    /// assert!(!r.contains(Point::new(0.6, 0.4)));
    /// ```
    pub fn contains(&self, p: Point) -> bool {
        self.xmin <= p.x && p.x <= self.xmax && self.ymin <= p.y && p.y <= self.ymax
    }

    /// Returns whether the two rectangles share at least one point
    /// (touching edges count).
    pub fn intersects(&self, other: &Self) -> bool {
        self.xmin <= other.xmax
            && other.xmin <= self.xmax
            && self.ymin <= other.ymax
            && other.ymin <= self.ymax
    }

    /// Squared Euclidean distance from the rectangle to a point; zero when the
    /// point is inside the rectangle or on its boundary.
    pub fn distance_squared_to(&self, p: Point) -> f64 {
        let dx = axis_distance(p.x, self.xmin, self.xmax);
        let dy = axis_distance(p.y, self.ymin, self.ymax);
        dx * dx + dy * dy
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}

/// Distance from a coordinate to an interval along one axis.
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}

/// The coordinate a tree level uses to partition its subtree.
///
/// The root splits on [`Axis::X`]; the axis alternates with each level of the
/// tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Split by x-coordinate (a vertical splitting line).
    X,
    /// Split by y-coordinate (a horizontal splitting line).
    Y,
}

impl Axis {
    /// The axis used one level deeper in the tree.
    pub fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// The point coordinate this axis compares.
    pub fn coord(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }
}
