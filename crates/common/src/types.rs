use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Smallest accepted grid side length.
pub const MIN_SIZE: usize = 3;
/// Largest accepted grid side length.
pub const MAX_SIZE: usize = 100;

/// A grid position, `(row, column)`.
///
/// Equality, hashing and ordering are structural; ordering is row-major.
/// Serialized as a two-element `[row, column]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.column)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Side length of a square toroidal grid, validated to `[MIN_SIZE, MAX_SIZE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// Validate a raw size. Signed so that negative input is reported rather
    /// than wrapped.
    pub fn new(size: i64) -> Result<Self, ConfigError> {
        match usize::try_from(size) {
            Ok(s) if (MIN_SIZE..=MAX_SIZE).contains(&s) => Ok(Self(s)),
            _ => Err(ConfigError::SizeOutOfRange {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            }),
        }
    }

    /// Decode a size from a dynamically typed value. Only JSON integers are
    /// accepted; `4.0` or `"4"` are rejected.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ConfigError> {
        match value.as_i64() {
            Some(size) => Self::new(size),
            None if value.is_u64() => Err(ConfigError::SizeOutOfRange {
                size: i64::MAX,
                min: MIN_SIZE,
                max: MAX_SIZE,
            }),
            None => Err(ConfigError::SizeNotInteger {
                found: value.to_string(),
            }),
        }
    }

    /// Clamp `size` into `[MIN_SIZE, MAX_SIZE]`. For compile-time defaults.
    pub const fn clamped(size: usize) -> Self {
        if size < MIN_SIZE {
            Self(MIN_SIZE)
        } else if size > MAX_SIZE {
            Self(MAX_SIZE)
        } else {
            Self(size)
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of positions on the grid (`size * size`).
    pub fn area(self) -> usize {
        self.0 * self.0
    }

    /// Whether a cell lies on this grid.
    pub fn contains(self, cell: Cell) -> bool {
        cell.row < self.0 && cell.column < self.0
    }
}

impl TryFrom<usize> for GridSize {
    type Error = ConfigError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(i64::try_from(size).unwrap_or(i64::MAX))
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
