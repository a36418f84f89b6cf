//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kd2d::prelude::*;
//! ```

pub use crate::Error;
pub use crate::KdTree;
pub use crate::PointSet;
pub use crate::geom::{Axis, Point, Rect};
