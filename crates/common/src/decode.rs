//! Validation of caller-supplied cells and generation limits.

use serde_json::Value;

use crate::{Cell, ConfigError, GridSize};

/// Validate one `(row, column)` pair against the grid.
///
/// `index` is the position of the pair in the caller's input and only
/// feeds error messages.
pub fn validate_cell(
    index: usize,
    row: i64,
    column: i64,
    size: GridSize,
) -> Result<Cell, ConfigError> {
    let row = checked_coordinate(index, row, size)?;
    let column = checked_coordinate(index, column, size)?;
    Ok(Cell::new(row, column))
}

fn checked_coordinate(index: usize, value: i64, size: GridSize) -> Result<usize, ConfigError> {
    let Ok(unsigned) = u64::try_from(value) else {
        return Err(ConfigError::NegativeCoordinate { index, value });
    };
    match usize::try_from(unsigned) {
        Ok(v) if v < size.get() => Ok(v),
        _ => Err(ConfigError::CoordinateOutOfRange {
            index,
            value: unsigned,
            size: size.get(),
        }),
    }
}

/// Decode a JSON sequence of `[row, column]` pairs.
///
/// Duplicates are kept here; collapsing them is the world's job.
pub fn decode_cells(value: &Value, size: GridSize) -> Result<Vec<Cell>, ConfigError> {
    let Some(items) = value.as_array() else {
        return Err(ConfigError::CellsNotSequence {
            found: value.to_string(),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_cell(index, item, size))
        .collect()
}

fn decode_cell(index: usize, item: &Value, size: GridSize) -> Result<Cell, ConfigError> {
    let Some(pair) = item.as_array() else {
        return Err(ConfigError::MalformedCell {
            index,
            found: item.to_string(),
        });
    };
    match pair.as_slice() {
        [row, column] => {
            let row = decode_coordinate(index, row, size)?;
            let column = decode_coordinate(index, column, size)?;
            Ok(Cell::new(row, column))
        }
        [] | [_] => Err(ConfigError::MissingCoordinate { index }),
        _ => Err(ConfigError::MalformedCell {
            index,
            found: item.to_string(),
        }),
    }
}

fn decode_coordinate(index: usize, value: &Value, size: GridSize) -> Result<usize, ConfigError> {
    if let Some(v) = value.as_i64() {
        return checked_coordinate(index, v, size);
    }
    // Integers beyond i64 are still integers, just far out of range.
    if let Some(v) = value.as_u64() {
        return Err(ConfigError::CoordinateOutOfRange {
            index,
            value: v,
            size: size.get(),
        });
    }
    Err(ConfigError::CoordinateNotInteger {
        index,
        found: value.to_string(),
    })
}

/// Validate an autoplay generation limit.
pub fn validate_generations(value: i64) -> Result<u64, ConfigError> {
    u64::try_from(value).map_err(|_| ConfigError::NegativeGenerations { value })
}

/// Decode an autoplay generation limit from a dynamically typed value.
pub fn decode_generations(value: &Value) -> Result<u64, ConfigError> {
    if let Some(v) = value.as_u64() {
        return Ok(v);
    }
    match value.as_i64() {
        Some(v) => validate_generations(v),
        None => Err(ConfigError::GenerationsNotInteger {
            found: value.to_string(),
        }),
    }
}
