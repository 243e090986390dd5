use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kdtree::{KDTree, KDTreeIndex, Node};
use crate::r#type::IndexablePoint;


pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Uniformly random points in `-100..100` on every dimension.
pub(crate) fn random_points<const D: usize>(n: usize, seed: u64) -> Vec<[f64; D]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| std::array::from_fn(|_| rng.gen_range(-100.0..100.0)))
        .collect()
}

/// Random points on a coarse integer grid, so that many coordinates and points repeat.
pub(crate) fn grid_points<const D: usize>(n: usize, seed: u64) -> Vec<[f64; D]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| std::array::from_fn(|_| rng.gen_range(0..10) as f64))
        .collect()
}

pub(crate) fn brute_force<const D: usize>(
    points: &[[f64; D]],
    center: &[f64; D],
    radius: f64,
) -> Vec<[f64; D]> {
    points
        .iter()
        .filter(|point| crate::kdtree::r#trait::distance(*point, center) <= radius)
        .copied()
        .collect()
}

pub(crate) fn sorted<const D: usize>(mut points: Vec<[f64; D]>) -> Vec<[f64; D]> {
    points.sort_by(|a, b| a.partial_cmp(b).unwrap());
    points
}

/// Walk the whole tree, asserting the partition invariant at every parent and the bucket bound
/// at every leaf. Returns the number of leaves.
pub(crate) fn check_invariants<P: IndexablePoint>(tree: &KDTree<P>) -> usize {
    let capacity = tree.bucket_capacity();
    let mut leaves = 0;
    let mut stack: Vec<Node<'_, P>> = vec![tree.root()];

    while let Some(node) = stack.pop() {
        match (node.left_child(), node.right_child()) {
            (Some(left), Some(right)) => {
                let dim = node.split_dim().unwrap();
                let value = node.split_value().unwrap();
                assert!(left.points().iter().all(|p| p.coord(dim) <= value));
                assert!(right.points().iter().all(|p| p.coord(dim) > value));
                assert_eq!(left.num_items() + right.num_items(), node.num_items());
                stack.push(left);
                stack.push(right);
            }
            (None, None) => {
                leaves += 1;
                let points = node.points();
                assert!(!points.is_empty());
                if points.len() > capacity {
                    // only a bucket of coincident points may overflow
                    let first = &points[0];
                    assert!(points
                        .iter()
                        .all(|p| (0..P::DIMS).all(|dim| p.coord(dim) == first.coord(dim))));
                }
            }
            _ => panic!("node with a single child"),
        }
    }

    leaves
}
