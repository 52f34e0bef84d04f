/// Invalid configuration supplied by the caller.
///
/// Raised only while constructing a world or configuring the autoplay
/// driver. Stepping and querying a world never fail. Each variant is a
/// different message for the same error kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: grid size {size} is outside [{min}, {max}]")]
    SizeOutOfRange { size: i64, min: usize, max: usize },
    #[error("invalid configuration: grid size must be an integer, got {found}")]
    SizeNotInteger { found: String },
    #[error("invalid configuration: initial cells must be a sequence, got {found}")]
    CellsNotSequence { found: String },
    #[error("invalid configuration: cell #{index} must be a [row, column] pair, got {found}")]
    MalformedCell { index: usize, found: String },
    #[error("invalid configuration: cell #{index} is missing a coordinate")]
    MissingCoordinate { index: usize },
    #[error("invalid configuration: cell #{index} has a non-integer coordinate {found}")]
    CoordinateNotInteger { index: usize, found: String },
    #[error("invalid configuration: cell #{index} has a negative coordinate {value}")]
    NegativeCoordinate { index: usize, value: i64 },
    #[error("invalid configuration: cell #{index} coordinate {value} is not below {size}")]
    CoordinateOutOfRange { index: usize, value: u64, size: usize },
    #[error("invalid configuration: generation count {value} is negative")]
    NegativeGenerations { value: i64 },
    #[error("invalid configuration: generation count must be an integer, got {found}")]
    GenerationsNotInteger { found: String },
}

impl ConfigError {
    /// Every configuration error is of the "invalid configuration" kind.
    pub fn is_invalid_configuration(&self) -> bool {
        true
    }
}
