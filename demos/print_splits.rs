//! Print the tree's splitting lines in level order.
//!
//! A renderer would draw each x-split as a vertical segment and each y-split
//! as a horizontal segment, clipped to the node's rectangle; this demo prints
//! the same triples as text.
use kd2d::prelude::*;

fn main() -> Result<(), Error> {
    let mut tree = KdTree::new();
    let _ = tree.insert(Point::new(0.7, 0.2))?;
    let _ = tree.insert(Point::new(0.5, 0.4))?;
    let _ = tree.insert(Point::new(0.2, 0.3))?;
    let _ = tree.insert(Point::new(0.4, 0.7))?;
    let _ = tree.insert(Point::new(0.9, 0.6))?;

    for (point, axis, rect) in tree.level_order() {
        match axis {
            Axis::X => println!(
                "{point} splits x: line from ({}, {}) to ({}, {})",
                point.x, rect.ymin, point.x, rect.ymax
            ),
            Axis::Y => println!(
                "{point} splits y: line from ({}, {}) to ({}, {})",
                rect.xmin, point.y, rect.xmax, point.y
            ),
        }
    }
    Ok(())
}
