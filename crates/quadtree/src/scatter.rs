//! Random point generation.

use crate::spatial::QuadTree;
use geometry::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outcome of a scatter run.
#[derive(Debug, Clone, Default)]
pub struct ScatterReport {
    /// Points the tree accepted, in insertion order.
    pub accepted: Vec<Point>,
    /// Points the tree rejected.
    pub rejected: usize,
}

/// Insert `count` points drawn uniformly from the tree's boundary.
pub fn scatter<R: Rng + ?Sized>(tree: &mut QuadTree, count: usize, rng: &mut R) -> ScatterReport {
    let bound = *tree.boundary();
    let mut report = ScatterReport {
        accepted: Vec::with_capacity(count),
        rejected: 0,
    };

    for _ in 0..count {
        let p = Point::new(
            rng.random_range(bound.min_x()..=bound.max_x()),
            rng.random_range(bound.min_y()..=bound.max_y()),
        );
        if tree.insert(p) {
            report.accepted.push(p);
        } else {
            report.rejected += 1;
        }
    }

    report
}

/// Like [`scatter`], with a reproducible RNG when `seed` is given.
pub fn scatter_seeded(tree: &mut QuadTree, count: usize, seed: Option<u64>) -> ScatterReport {
    match seed {
        Some(seed) => scatter(tree, count, &mut StdRng::seed_from_u64(seed)),
        None => scatter(tree, count, &mut rand::rng()),
    }
}
