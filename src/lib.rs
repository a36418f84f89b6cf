//! # kd2d - 2d-tree Spatial Index
//!
//! A Rust library providing a dynamic 2d-tree for point insertion, membership
//! testing, axis-aligned range queries and nearest-neighbor queries over a
//! planar point set.
//!
//! ## Features
//!
//! - **Alternating-axis partitioning**: a binary search tree keyed on x- and
//!   y-coordinates in strictly alternating sequence
//! - **Rectangle pruning**: range and nearest-neighbor queries skip every
//!   subtree whose bounding rectangle provably holds no qualifying point
//! - **Deterministic results**: a fixed tie-break rule for equal splitting
//!   coordinates and strict-improvement champion updates make query results
//!   reproducible for a fixed insertion order
//! - **Brute-force baseline**: [`PointSet`] answers the same queries by
//!   linear scan, usable as an oracle or for tiny point sets
//!
//! ## Quick Start
//!
//! ```rust
//! use kd2d::prelude::*;
//!
//! # fn main() -> Result<(), kd2d::Error> {
//! // Points live in the unit square by default
//! let mut tree = KdTree::new();
//!
//! tree.insert(Point::new(0.7, 0.2))?;
//! tree.insert(Point::new(0.5, 0.4))?;
//! tree.insert(Point::new(0.2, 0.3))?;
//! tree.insert(Point::new(0.4, 0.7))?;
//! tree.insert(Point::new(0.9, 0.6))?;
//!
//! // Axis-aligned range query, boundaries inclusive
//! let mut results = Vec::new();
//! tree.range(&Rect::new(0.0, 0.0, 0.5, 0.5), &mut results)?;
//! assert_eq!(results.len(), 2);
//!
//! // Nearest neighbor to a query point
//! let near = tree.nearest(Point::new(1.0, 1.0))?;
//! assert_eq!(near, Some(Point::new(0.9, 0.6)));
//! # Ok(())
//! # }
//! ```
//!
//! ## How It Works
//!
//! Each node splits the plane at its point along one axis, alternating x and
//! y with tree depth, and records the rectangle its subtree is confined to.
//! A range query only descends into subtrees whose rectangle intersects the
//! query rectangle; a nearest-neighbor query descends into the closer child
//! first and enters the farther child only while its rectangle is still
//! closer than the best point found so far.
//!
//! The tree does not rebalance. Randomly ordered insertions give expected
//! logarithmic height, but sorted (for example diagonal) insertion order
//! degrades the tree, and with it every operation, to linear time.

pub mod error;
pub mod geom;
pub mod kd_tree;
pub mod point_set;
pub mod prelude;
mod queries;

pub use error::Error;
pub use geom::{Axis, Point, Rect};
pub use kd_tree::{KdTree, LevelOrder};
pub use point_set::PointSet;

#[cfg(test)]
mod comparison_tests;
