//! World Kernel: live-cell state of a toroidal Game of Life grid and its
//! generation stepping.
//!
//! # Invariants
//! - Every stored cell lies inside the grid; neighbor lookups wrap.
//! - `advance` is a pure function of the previous generation (B3/S23) and
//!   bumps the generation counter by exactly one.
//! - Randomness is only consumed at construction time.

mod advance;
pub mod neighbors;
pub mod seed;
pub mod world;

pub use advance::next_generation;
pub use neighbors::{neighbors, wrap};
pub use seed::{SeedStrategy, UniformDraws};
pub use toruslife_common::{Cell, ConfigError, GridSize};
pub use world::{World, WorldSummary};
