//! Error taxonomy for tree and point-set operations.

use crate::geom::{Point, Rect};

/// Errors returned by [`KdTree`](crate::KdTree) and
/// [`PointSet`](crate::PointSet) operations.
///
/// Arguments are validated before any traversal or mutation, so a returned
/// error always means the structure is unchanged. An empty query result is
/// not an error: [`KdTree::nearest`](crate::KdTree::nearest) reports an empty
/// tree as `Ok(None)`.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A point argument has a NaN or infinite coordinate.
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinitePoint {
        /// The offending x-coordinate.
        x: f64,
        /// The offending y-coordinate.
        y: f64,
    },

    /// A rectangle argument is non-finite or inverted (min above max).
    #[error("rectangle [{xmin}, {xmax}] x [{ymin}, {ymax}] is not a valid axis-aligned box")]
    InvalidRect {
        /// Minimum x-coordinate of the offending rectangle.
        xmin: f64,
        /// Minimum y-coordinate of the offending rectangle.
        ymin: f64,
        /// Maximum x-coordinate of the offending rectangle.
        xmax: f64,
        /// Maximum y-coordinate of the offending rectangle.
        ymax: f64,
    },

    /// An inserted point lies outside the tree's domain rectangle.
    #[error("point ({x}, {y}) lies outside the tree domain")]
    OutOfDomain {
        /// The rejected x-coordinate.
        x: f64,
        /// The rejected y-coordinate.
        y: f64,
    },
}

/// Rejects points with NaN or infinite coordinates.
pub(crate) fn check_point(p: Point) -> Result<(), Error> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinitePoint { x: p.x, y: p.y })
    }
}

/// Rejects non-finite or inverted rectangles.
pub(crate) fn check_rect(rect: &Rect) -> Result<(), Error> {
    if rect.is_valid() {
        Ok(())
    } else {
        Err(Error::InvalidRect {
            xmin: rect.xmin,
            ymin: rect.ymin,
            xmax: rect.xmax,
            ymax: rect.ymax,
        })
    }
}
