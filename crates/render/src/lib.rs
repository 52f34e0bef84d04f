//! Rendering Adapter: renderer-agnostic interface over world snapshots.
//!
//! # Invariants
//! - Renderers cannot mutate the world; they only query it.
//! - The boxed grid is exactly `size` glyphs wide and `size` rows tall
//!   between its borders.

mod renderer;

pub use renderer::{BoxTextRenderer, Glyphs, JsonRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "toruslife-render v0.1.0"
}
