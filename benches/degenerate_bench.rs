//! Benchmark for the documented worst case: sorted insertion order
//!
//! Inserting points along the diagonal routes every point to the right
//! child, so the tree degrades to a linked list of height n and queries
//! degrade to linear scans. This bench makes the cost visible next to the
//! shuffled-insertion case of the same point set.

use kd2d::{KdTree, Point};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::time::Instant;

const NUM_POINTS: usize = 10_000;
const NUM_QUERIES: usize = 1_000;

fn diagonal_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let c = i as f64 / n as f64;
            Point::new(c, c)
        })
        .collect()
}

fn bench_case(label: &str, points: &[Point]) {
    let start = Instant::now();
    let mut tree = KdTree::new();
    for &p in points {
        let _ = tree.insert(p).expect("point in unit square");
    }
    println!("{label}: build {} points: {}ms", points.len(), start.elapsed().as_millis());

    let start = Instant::now();
    for i in 0..NUM_QUERIES {
        let c = i as f64 / NUM_QUERIES as f64;
        let _ = tree.nearest(Point::new(c, 1.0 - c)).expect("finite query point");
    }
    println!("{label}: {NUM_QUERIES} nearest queries: {}ms", start.elapsed().as_millis());
}

fn main() {
    let sorted = diagonal_points(NUM_POINTS);

    let mut shuffled = sorted.clone();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    shuffled.shuffle(&mut rng);

    bench_case("sorted  ", &sorted);
    bench_case("shuffled", &shuffled);
}
