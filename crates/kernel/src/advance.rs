use std::collections::HashSet;

use toruslife_common::{Cell, GridSize};

use crate::neighbors::neighbors;

/// Compute the next generation from a frozen snapshot of live cells.
///
/// Only live cells and their dead neighbors are evaluated; any other cell
/// has no live neighbor and stays dead. Reads `live` only, so the update is
/// synchronous across the grid.
pub fn next_generation(live: &HashSet<Cell>, size: GridSize) -> HashSet<Cell> {
    let candidates = candidates(live, size);
    tracing::trace!(
        live = live.len(),
        candidates = candidates.len(),
        "evaluating candidates"
    );

    candidates
        .into_iter()
        .filter(|cell| {
            let alive_neighbors = neighbors(*cell, size)
                .iter()
                .filter(|n| live.contains(n))
                .count();
            lives_on(live.contains(cell), alive_neighbors)
        })
        .collect()
}

fn candidates(live: &HashSet<Cell>, size: GridSize) -> HashSet<Cell> {
    let mut out = HashSet::with_capacity(live.len() * 9);
    for &cell in live {
        out.insert(cell);
        out.extend(neighbors(cell, size));
    }
    out
}

/// B3/S23.
fn lives_on(alive: bool, alive_neighbors: usize) -> bool {
    alive_neighbors == 3 || (alive && alive_neighbors == 2)
}
