//! Collect all stored points inside a query rectangle.
use kd2d::prelude::*;

fn main() -> Result<(), Error> {
    let mut tree = KdTree::new();
    let _ = tree.insert(Point::new(0.7, 0.2))?;
    let _ = tree.insert(Point::new(0.5, 0.4))?;
    let _ = tree.insert(Point::new(0.2, 0.3))?;
    let _ = tree.insert(Point::new(0.4, 0.7))?;
    let _ = tree.insert(Point::new(0.9, 0.6))?;

    let rect = Rect::new(0.0, 0.0, 0.5, 0.5);
    let mut results = Vec::new();
    tree.range(&rect, &mut results)?;

    println!("Points in {rect}:");
    for p in results {
        println!("  {p}");
    }
    Ok(())
}
