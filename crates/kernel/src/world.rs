use serde::Serialize;
use std::collections::HashSet;
use toruslife_common::{Cell, ConfigError, GridSize, decode_cells, validate_cell};

use crate::advance::next_generation;
use crate::seed::{SeedStrategy, UniformDraws};

/// The authoritative state of a toroidal Game of Life grid.
///
/// Stores only the live cells, so stepping costs scale with the population
/// rather than with `size * size`.
///
/// Single-writer, not internally synchronized: `advance` replaces the whole
/// live set as one unit. Share a `World` across threads behind a `Mutex` or
/// an owning task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    size: GridSize,
    generation: u64,
    live: HashSet<Cell>,
}

impl World {
    /// Create a world of side `size`.
    ///
    /// With `initial_cells`, every pair must be non-negative and below
    /// `size`; duplicates collapse. Without it, the grid is seeded randomly
    /// (see [`UniformDraws`]). Either way the world starts at generation 1.
    pub fn new(size: i64, initial_cells: Option<&[(i64, i64)]>) -> Result<Self, ConfigError> {
        let size = GridSize::new(size)?;
        let Some(pairs) = initial_cells else {
            return Ok(Self::random(size));
        };
        let live = pairs
            .iter()
            .enumerate()
            .map(|(index, &(row, column))| validate_cell(index, row, column, size))
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self::from_live(size, live))
    }

    /// Create a world from already typed cells, checking they fit the grid.
    pub fn from_cells(
        size: GridSize,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, ConfigError> {
        let mut live = HashSet::new();
        for (index, cell) in cells.into_iter().enumerate() {
            if !size.contains(cell) {
                let value = if cell.row >= size.get() {
                    cell.row
                } else {
                    cell.column
                };
                return Err(ConfigError::CoordinateOutOfRange {
                    index,
                    value: value as u64,
                    size: size.get(),
                });
            }
            live.insert(cell);
        }
        Ok(Self::from_live(size, live))
    }

    /// Create a world from dynamically typed input, e.g. parsed JSON.
    ///
    /// `cells` must be an array of `[row, column]` integer pairs; `None`
    /// (or JSON `null`) seeds randomly.
    pub fn from_value(
        size: &serde_json::Value,
        cells: Option<&serde_json::Value>,
    ) -> Result<Self, ConfigError> {
        let size = GridSize::from_value(size)?;
        match cells.filter(|v| !v.is_null()) {
            Some(cells) => Self::from_cells(size, decode_cells(cells, size)?),
            None => Ok(Self::random(size)),
        }
    }

    /// Randomly seeded world using OS entropy.
    pub fn random(size: GridSize) -> Self {
        Self::from_strategy(size, &mut UniformDraws::from_entropy())
    }

    /// Randomly seeded world that is reproducible from `seed`.
    pub fn with_seed(size: GridSize, seed: u64) -> Self {
        Self::from_strategy(size, &mut UniformDraws::from_seed(seed))
    }

    /// Seed a world with any strategy. Cells the strategy places off the
    /// grid are discarded.
    pub fn from_strategy(size: GridSize, strategy: &mut impl SeedStrategy) -> Self {
        let live = strategy
            .seed(size)
            .into_iter()
            .filter(|cell| size.contains(*cell))
            .collect();
        Self::from_live(size, live)
    }

    fn from_live(size: GridSize, live: HashSet<Cell>) -> Self {
        tracing::debug!(%size, population = live.len(), "world created");
        Self {
            size,
            generation: 1,
            live,
        }
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    pub fn grid_size(&self) -> GridSize {
        self.size
    }

    /// Current generation, starting at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Snapshot of the live cells in row-major order.
    pub fn alive_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.live.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Whether `cell` is alive. Off-grid cells are never alive.
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    /// Advance one generation under B3/S23. Never fails; an empty world
    /// stays empty while the counter still moves.
    pub fn advance(&mut self) {
        self.live = next_generation(&self.live, self.size);
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            population = self.live.len(),
            "advanced"
        );
    }

    /// Advance `n` generations.
    pub fn advance_by(&mut self, n: u64) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn summary(&self) -> WorldSummary {
        WorldSummary {
            generation: self.generation,
            size: self.size.get(),
            population: self.live.len(),
        }
    }

    /// Deterministic hash of generation, size and live cells.
    /// Independent of hash-set iteration order.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.generation.to_le_bytes());
        mix(&mut h, &(self.size.get() as u64).to_le_bytes());
        for cell in self.alive_cells() {
            mix(&mut h, &(cell.row as u64).to_le_bytes());
            mix(&mut h, &(cell.column as u64).to_le_bytes());
        }
        h
    }
}

/// Headline numbers of a world, for logs and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorldSummary {
    pub generation: u64,
    pub size: usize,
    pub population: usize,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: generation={} size={} population={}",
            self.generation, self.size, self.population
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cells(pairs: &[(usize, usize)]) -> Vec<Cell> {
        let mut v: Vec<Cell> = pairs.iter().copied().map(Cell::from).collect();
        v.sort();
        v
    }

    #[test]
    fn explicit_world_starts_at_generation_one() {
        let w = World::new(5, Some(&[(0, 0), (4, 4)])).unwrap();
        assert_eq!(w.generation(), 1);
        assert_eq!(w.size(), 5);
        assert_eq!(w.alive_cells(), cells(&[(0, 0), (4, 4)]));
    }

    #[test]
    fn random_world_starts_at_generation_one() {
        let w = World::new(10, None).unwrap();
        assert_eq!(w.generation(), 1);
        assert!(w.alive_cells().iter().all(|c| c.row < 10 && c.column < 10));
    }

    #[test]
    fn rejects_invalid_size() {
        for bad in [2, 101, -1, 0] {
            let err = World::new(bad, None).unwrap_err();
            assert!(err.is_invalid_configuration());
            assert!(matches!(err, ConfigError::SizeOutOfRange { .. }));
        }
        assert!(matches!(
            World::from_value(&json!(5.5), None),
            Err(ConfigError::SizeNotInteger { .. })
        ));
    }

    #[test]
    fn rejects_invalid_initial_cell() {
        assert!(matches!(
            World::new(5, Some(&[(0, 5)])),
            Err(ConfigError::CoordinateOutOfRange { .. })
        ));
        assert!(matches!(
            World::new(5, Some(&[(1, 1), (-1, 0)])),
            Err(ConfigError::NegativeCoordinate { index: 1, value: -1 })
        ));
        let size = GridSize::new(5).unwrap();
        assert_eq!(
            World::from_cells(size, [Cell::new(0, 0), Cell::new(2, 9)]),
            Err(ConfigError::CoordinateOutOfRange {
                index: 1,
                value: 9,
                size: 5
            })
        );
    }

    #[test]
    fn from_value_decodes_cells() {
        let w = World::from_value(&json!(6), Some(&json!([[1, 2], [3, 4]]))).unwrap();
        assert_eq!(w.alive_cells(), cells(&[(1, 2), (3, 4)]));

        let err = World::from_value(&json!(6), Some(&json!([[1]]))).unwrap_err();
        assert_eq!(err, ConfigError::MissingCoordinate { index: 0 });

        // null means "seed randomly"
        let w = World::from_value(&json!(6), Some(&json!(null))).unwrap();
        assert_eq!(w.generation(), 1);
    }

    #[test]
    fn duplicates_collapse() {
        let w = World::new(5, Some(&[(2, 3), (2, 3), (1, 1)])).unwrap();
        assert_eq!(w.population(), 2);
        assert_eq!(
            w.alive_cells().iter().filter(|c| **c == Cell::new(2, 3)).count(),
            1
        );
    }

    #[test]
    fn empty_initial_cells_is_empty_world() {
        let w = World::new(4, Some(&[])).unwrap();
        assert!(w.is_empty());
    }

    #[test]
    fn is_alive_reports_membership() {
        let w = World::new(5, Some(&[(1, 2)])).unwrap();
        assert!(w.is_alive(Cell::new(1, 2)));
        assert!(!w.is_alive(Cell::new(2, 1)));
        assert!(!w.is_alive(Cell::new(50, 50)));
    }

    #[test]
    fn alive_cells_is_a_detached_snapshot() {
        let mut w = World::new(5, Some(&[(2, 1), (2, 2), (2, 3)])).unwrap();
        let before = w.alive_cells();
        w.advance();
        assert_eq!(before, cells(&[(2, 1), (2, 2), (2, 3)]));
        assert_ne!(before, w.alive_cells());
    }

    #[test]
    fn empty_world_counts_generations() {
        let mut w = World::new(7, Some(&[])).unwrap();
        w.advance_by(25);
        assert!(w.is_empty());
        assert_eq!(w.generation(), 26);
    }

    #[test]
    fn block_is_still() {
        let mut w = World::new(4, Some(&[(1, 1), (1, 2), (2, 1), (2, 2)])).unwrap();
        let before = w.alive_cells();
        w.advance();
        assert_eq!(w.alive_cells(), before);
        assert_eq!(w.generation(), 2);
    }

    #[test]
    fn blinker_oscillates() {
        let mut w = World::new(5, Some(&[(2, 1), (2, 2), (2, 3)])).unwrap();
        w.advance();
        assert_eq!(w.alive_cells(), cells(&[(1, 2), (2, 2), (3, 2)]));
        w.advance();
        assert_eq!(w.alive_cells(), cells(&[(2, 1), (2, 2), (2, 3)]));
        assert_eq!(w.generation(), 3);
    }

    #[test]
    fn seeded_worlds_are_reproducible() {
        let size = GridSize::new(30).unwrap();
        let mut a = World::with_seed(size, 9);
        let mut b = World::with_seed(size, 9);
        assert_eq!(a, b);
        a.advance_by(10);
        b.advance_by(10);
        assert_eq!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn custom_strategy_is_clipped_to_grid() {
        struct Diagonal;
        impl SeedStrategy for Diagonal {
            fn seed(&mut self, _size: GridSize) -> HashSet<Cell> {
                (0..10).map(|i| Cell::new(i, i)).collect()
            }
        }
        let w = World::from_strategy(GridSize::new(4).unwrap(), &mut Diagonal);
        assert_eq!(w.population(), 4);
    }

    #[test]
    fn state_hash_tracks_generation_and_cells() {
        let a = World::new(5, Some(&[(0, 0), (1, 1)])).unwrap();
        let b = World::new(5, Some(&[(1, 1), (0, 0)])).unwrap();
        assert_eq!(a.state_hash(), b.state_hash());

        let mut c = a.clone();
        c.advance();
        assert_ne!(a.state_hash(), c.state_hash());
    }

    #[test]
    fn summary_display() {
        let w = World::new(5, Some(&[(0, 0)])).unwrap();
        let s = format!("{}", w.summary());
        assert!(s.contains("generation=1"));
        assert!(s.contains("population=1"));
    }
}
