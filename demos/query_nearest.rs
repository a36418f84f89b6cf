//! Find the stored point nearest to a query point.
use kd2d::prelude::*;

fn main() -> Result<(), Error> {
    let mut tree = KdTree::new();
    let _ = tree.insert(Point::new(0.7, 0.2))?;
    let _ = tree.insert(Point::new(0.5, 0.4))?;
    let _ = tree.insert(Point::new(0.9, 0.6))?;

    if let Some(p) = tree.nearest(Point::new(1.0, 1.0))? {
        println!("Nearest point: {p}");
    }
    Ok(())
}
