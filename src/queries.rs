//! Range and nearest-neighbor queries for [`KdTree`].
//!
//! Both queries rely on the bounding rectangles assigned during insertion:
//! every point of a subtree lies inside that subtree's rectangle, so a
//! subtree whose rectangle misses the query region, or cannot hold anything
//! closer than the best candidate so far, is skipped without being visited.

use crate::error::{Error, check_point, check_rect};
use crate::geom::{Point, Rect};
use crate::kd_tree::{KdTree, Node};

/// Best-so-far candidate threaded through the nearest-neighbor recursion.
///
/// Kept as an explicit accumulator rather than tree state so that concurrent
/// read-only queries never observe each other.
struct Champion {
    point: Point,
    dist_sq: f64,
}

impl KdTree {
    /// Collects every stored point inside the query rectangle, boundaries
    /// inclusive, into `results` (cleared first). Order is not significant.
    ///
    /// Expected cost is `O(R + log n)` for small query rectangles, where `R`
    /// is the number of reported points; a rectangle covering the whole
    /// domain visits every node.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRect`] if the rectangle is non-finite or
    /// inverted.
    ///
    /// # Examples
    /// ```
    /// use kd2d::{KdTree, Point, Rect};
    ///
    /// # fn main() -> Result<(), kd2d::Error> {
    /// let mut tree = KdTree::new();
    /// tree.insert(Point::new(0.2, 0.3))?;
    /// tree.insert(Point::new(0.9, 0.6))?;
    ///
    /// let mut results = Vec::new();
    /// tree.range(&Rect::new(0.0, 0.0, 0.5, 0.5), &mut results)?;
    /// assert_eq!(results, vec![Point::new(0.2, 0.3)]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn range(&self, rect: &Rect, results: &mut Vec<Point>) -> Result<(), Error> {
        check_rect(rect)?;
        results.clear();

        let mut stack: Vec<&Node> = Vec::new();
        if let Some(root) = self.root() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            // A subtree is confined to its node's rectangle, so no point of
            // it can match once the rectangles are disjoint.
            if !rect.intersects(&node.rect) {
                continue;
            }
            if rect.contains(node.point) {
                results.push(node.point);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
        }
        Ok(())
    }

    /// Like [`KdTree::range`], returning a freshly allocated vector.
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
    /// `Ok(None)` if the tree is empty.
    ///
    /// When several stored points are equidistant from the query the result
    /// is any one of them, chosen deterministically for a fixed tree: the
    /// champion only changes on a strictly smaller squared distance, so the
    /// earliest-visited of the tied points wins.
    ///
    /// # Errors
    /// Returns [`Error::NonFinitePoint`] for NaN or infinite coordinates.
    ///
    /// # Examples
    /// ```
    /// use kd2d::{KdTree, Point};
    ///
    /// # fn main() -> Result<(), kd2d::Error> {
    /// let mut tree = KdTree::new();
    /// assert_eq!(tree.nearest(Point::new(0.5, 0.5))?, None);
    ///
    /// tree.insert(Point::new(0.4, 0.7))?;
    /// tree.insert(Point::new(0.9, 0.6))?;
    /// assert_eq!(tree.nearest(Point::new(1.0, 1.0))?, Some(Point::new(0.9, 0.6)));
    /// # Ok(())
    /// # }
    /// ```
    pub fn nearest(&self, query: Point) -> Result<Option<Point>, Error> {
        check_point(query)?;
        let Some(root) = self.root() else {
            return Ok(None);
        };
        let mut best = Champion {
            point: root.point,
            dist_sq: root.point.distance_squared_to(query),
        };
        nearest_in(root, query, &mut best);
        Ok(Some(best.point))
    }
}

/// Recursive nearest-neighbor search with branch elimination.
fn nearest_in(node: &Node, query: Point, best: &mut Champion) {
    let dist_sq = node.point.distance_squared_to(query);
    if dist_sq < best.dist_sq {
        best.point = node.point;
        best.dist_sq = dist_sq;
    }

    match (node.left.as_deref(), node.right.as_deref()) {
        (Some(left), Some(right)) => {
            let left_dist = left.rect.distance_squared_to(query);
            let right_dist = right.rect.distance_squared_to(query);

            // Visit the child whose rectangle is closer first; the farther
            // child is only entered if its rectangle could still beat the
            // champion found on the near side.
            if left_dist < right_dist {
                nearest_in(left, query, best);
                if right_dist < best.dist_sq {
                    nearest_in(right, query, best);
                }
            } else {
                nearest_in(right, query, best);
                if left_dist < best.dist_sq {
                    nearest_in(left, query, best);
                }
            }
        }
        (Some(child), None) | (None, Some(child)) => {
            if child.rect.distance_squared_to(query) < best.dist_sq {
                nearest_in(child, query, best);
            }
        }
        (None, None) => {}
    }
}
