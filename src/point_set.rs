//! Brute-force point set with the same query surface as [`KdTree`](crate::KdTree).
//!
//! Points live in an ordered set keyed by the lexicographic point order;
//! every query is a linear scan over it. This is the reference
//! implementation the randomized comparison tests check the tree against; it
//! is also a reasonable choice on its own for very small point sets where
//! tree overhead is not worth paying.

use std::collections::BTreeSet;

use crate::error::{Error, check_point, check_rect};
use crate::geom::{Point, Rect};

/// A planar point set backed by a `BTreeSet`, queried by linear scan.
///
/// Semantics match [`KdTree`](crate::KdTree) operation for operation (unique keys, inclusive
/// range boundaries, strict-improvement nearest), except that there is no
/// domain rectangle: any finite point can be inserted.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: BTreeSet<Point>,
}

impl PointSet {
    /// Creates an empty point set.
    pub fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Number of distinct points stored.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the stored points in ascending lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Inserts a point, returning `Ok(true)` if it was added and `Ok(false)`
    /// if an equal point was already present.
    ///
    /// # Errors
    /// Returns [`Error::NonFinitePoint`] for NaN or infinite coordinates.
    pub fn insert(&mut self, p: Point) -> Result<bool, Error> {
        check_point(p)?;
        Ok(self.points.insert(p))
    }

    /// Returns whether an equal point is stored.
    ///
    /// # Errors
    /// Returns [`Error::NonFinitePoint`] for NaN or infinite coordinates.
    pub fn contains(&self, p: Point) -> Result<bool, Error> {
        check_point(p)?;
        Ok(self.points.contains(&p))
    }

    /// Collects every stored point inside the query rectangle, boundaries
    /// inclusive, into `results` (cleared first).
    ///
    /// # Errors
    /// Returns [`Error::InvalidRect`] if the rectangle is non-finite or
    /// inverted.
    pub fn range(&self, rect: &Rect, results: &mut Vec<Point>) -> Result<(), Error> {
        check_rect(rect)?;
        results.clear();
        for &p in &self.points {
            if rect.contains(p) {
                results.push(p);
            }
        }
        Ok(())
    }

    /// Like [`PointSet::range`], returning a freshly allocated vector.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRect`] if the rectangle is non-finite or
    /// inverted.
    pub fn range_vec(&self, rect: &Rect) -> Result<Vec<Point>, Error> {
        let mut results = Vec::new();
        self.range(rect, &mut results)?;
        Ok(results)
    }

    /// Returns a stored point with minimum Euclidean distance to `query`, or
    /// `Ok(None)` if the set is empty. The scan visits points in ascending
    /// lexicographic order and only replaces the candidate on a strictly
    /// smaller squared distance, so ties keep the lexicographically smallest
    /// of the tied points.
    ///
    /// # Errors
    /// Returns [`Error::NonFinitePoint`] for NaN or infinite coordinates.
    pub fn nearest(&self, query: Point) -> Result<Option<Point>, Error> {
        check_point(query)?;
        let mut best: Option<(Point, f64)> = None;
        for &p in &self.points {
            let dist_sq = p.distance_squared_to(query);
            match best {
                Some((_, best_sq)) if dist_sq >= best_sq => {}
                _ => best = Some((p, dist_sq)),
            }
        }
        Ok(best.map(|(p, _)| p))
    }
}
