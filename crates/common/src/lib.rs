//! Shared types for the torus-life workspace.
//!
//! # Invariants
//! - A `GridSize` always lies within `[MIN_SIZE, MAX_SIZE]`.
//! - A `Cell` produced by any decoder in this crate lies inside its grid.
//! - Every configuration failure is a `ConfigError` (the single
//!   "invalid configuration" kind); nothing here panics on bad input.

mod decode;
mod error;
mod types;

pub use decode::{decode_cells, decode_generations, validate_cell, validate_generations};
pub use error::ConfigError;
pub use types::{Cell, GridSize, MAX_SIZE, MIN_SIZE};

pub fn crate_info() -> &'static str {
    "toruslife-common v0.1.0"
}
