//! Comparison tests between KdTree (pruned traversal) and PointSet (linear scan)
//!
//! The brute-force set is the oracle: for every query both structures must
//! agree on the result set (range) or on the minimum distance (nearest).

#[cfg(test)]
mod tests {
    use crate::{KdTree, Point, PointSet, Rect};
    use rand::{Rng, SeedableRng};

    /// Helper to insert the same points into both structures
    fn setup_pair(points: &[Point]) -> (KdTree, PointSet) {
        let mut tree = KdTree::new();
        let mut set = PointSet::new();
        for &p in points {
            let tree_inserted = tree.insert(p).unwrap();
            let set_inserted = set.insert(p).unwrap();
            assert_eq!(
                tree_inserted, set_inserted,
                "Tree and set must agree on duplicate detection for {p}"
            );
        }
        (tree, set)
    }

    fn random_points<R: Rng>(rng: &mut R, n: usize) -> Vec<Point> {
        (0..n)
            .map(|_| Point::new(rng.random_range(0.0..=1.0), rng.random_range(0.0..=1.0)))
            .collect()
    }

    fn sorted(mut points: Vec<Point>) -> Vec<Point> {
        points.sort();
        points
    }

    #[test]
    fn test_size_consistency_with_duplicates() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut points = random_points(&mut rng, 200);
        let repeats = points.clone();
        points.extend(repeats);

        let (tree, set) = setup_pair(&points);
        assert_eq!(tree.size(), set.size(), "Sizes must match after duplicate inserts");
        assert_eq!(tree.size(), 200);
    }

    #[test]
    fn test_contains_consistency() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let points = random_points(&mut rng, 500);
        let (tree, set) = setup_pair(&points);

        for &p in &points {
            assert!(tree.contains(p).unwrap(), "Inserted point {p} must be found");
        }
        // Fresh random points are almost surely absent from both
        for probe in random_points(&mut rng, 200) {
            assert_eq!(
                tree.contains(probe).unwrap(),
                set.contains(probe).unwrap(),
                "Membership disagreement for {probe}"
            );
        }
    }

    #[test]
    fn test_range_consistency_random_rects() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let points = random_points(&mut rng, 1000);
        let (tree, set) = setup_pair(&points);

        for _ in 0..100 {
            let x0 = rng.random_range(0.0..1.0);
            let y0 = rng.random_range(0.0..1.0);
            let rect = Rect::new(
                x0,
                y0,
                (x0 + rng.random_range(0.0..0.4)).min(1.0),
                (y0 + rng.random_range(0.0..0.4)).min(1.0),
            );

            let from_tree = sorted(tree.range_vec(&rect).unwrap());
            let from_set = sorted(set.range_vec(&rect).unwrap());
            assert_eq!(from_tree, from_set, "Range results differ for {rect}");
        }
    }

    #[test]
    fn test_range_consistency_whole_domain() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let points = random_points(&mut rng, 300);
        let (tree, set) = setup_pair(&points);

        let from_tree = sorted(tree.range_vec(&Rect::UNIT).unwrap());
        let from_set = sorted(set.range_vec(&Rect::UNIT).unwrap());
        assert_eq!(from_tree.len(), tree.size());
        assert_eq!(from_tree, from_set);
    }

    #[test]
    fn test_nearest_consistency_random_queries() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1234);
        let points = random_points(&mut rng, 1000);
        let (tree, set) = setup_pair(&points);

        for _ in 0..200 {
            let query = Point::new(rng.random_range(-0.2..1.2), rng.random_range(-0.2..1.2));
            let from_tree = tree.nearest(query).unwrap().unwrap();
            let from_set = set.nearest(query).unwrap().unwrap();
            // Identity may differ on exact ties; the distance may not
            assert_eq!(
                from_tree.distance_squared_to(query),
                from_set.distance_squared_to(query),
                "Nearest distance differs for query {query}: tree {from_tree}, scan {from_set}"
            );
        }
    }

    #[test]
    fn test_nearest_consistency_on_shared_coordinates() {
        // A coarse grid forces many equal splitting coordinates, stressing
        // the tie-break routing on both insert and search paths.
        let mut grid = Vec::new();
        for i in 0..=10 {
            for j in 0..=10 {
                grid.push(Point::new(f64::from(i) / 10.0, f64::from(j) / 10.0));
            }
        }
        let (tree, set) = setup_pair(&grid);
        assert_eq!(tree.size(), 121);

        let mut rng = rand::rngs::StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let query = Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
            let from_tree = tree.nearest(query).unwrap().unwrap();
            let from_set = set.nearest(query).unwrap().unwrap();
            assert_eq!(
                from_tree.distance_squared_to(query),
                from_set.distance_squared_to(query),
                "Nearest distance differs on grid for query {query}"
            );
        }
    }

    #[test]
    fn test_range_consistency_on_shared_coordinates() {
        let mut grid = Vec::new();
        for i in 0..=10 {
            for j in 0..=10 {
                grid.push(Point::new(f64::from(i) / 10.0, f64::from(j) / 10.0));
            }
        }
        let (tree, set) = setup_pair(&grid);

        // Query edges aligned with the grid exercise inclusive boundaries
        let rect = Rect::new(0.2, 0.2, 0.5, 0.5);
        let from_tree = sorted(tree.range_vec(&rect).unwrap());
        let from_set = sorted(set.range_vec(&rect).unwrap());
        assert_eq!(from_tree.len(), 16, "4x4 grid points fall in the query");
        assert_eq!(from_tree, from_set);
    }
}
