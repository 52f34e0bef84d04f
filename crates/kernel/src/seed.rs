//! Initial-state seeding.
//!
//! A strategy turns a grid size into a set of live cells. The default
//! [`UniformDraws`] draws a count `k` uniformly from `[0, size * size]` and
//! then inserts `k` uniformly random cells, letting collisions collapse.
//! The collisions mean the live population is usually well below `k`; that
//! density is kept as-is.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use toruslife_common::{Cell, GridSize};

/// Produces an initial live-cell set for a grid.
pub trait SeedStrategy {
    fn seed(&mut self, size: GridSize) -> HashSet<Cell>;
}

/// Draw-count-then-collide random seeding over any RNG.
#[derive(Debug, Clone)]
pub struct UniformDraws<R> {
    rng: R,
}

impl<R: Rng> UniformDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformDraws<StdRng> {
    /// Reproducible seeding: the same seed yields the same cells.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SeedStrategy for UniformDraws<R> {
    fn seed(&mut self, size: GridSize) -> HashSet<Cell> {
        let n = size.get();
        let draws = self.rng.gen_range(0..=size.area());
        let mut live = HashSet::with_capacity(draws);
        for _ in 0..draws {
            let row = self.rng.gen_range(0..n);
            let column = self.rng.gen_range(0..n);
            live.insert(Cell::new(row, column));
        }
        tracing::trace!(draws, unique = live.len(), "uniform draws seeded");
        live
    }
}
