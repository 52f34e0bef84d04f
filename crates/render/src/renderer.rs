use serde_json::json;
use toruslife_common::Cell;
use toruslife_kernel::World;

/// Glyph set used to draw a boxed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            alive: '●',
            dead: ' ',
        }
    }
}

impl Glyphs {
    /// Plain ASCII glyphs for terminals without box-drawing support.
    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            alive: '#',
            dead: ' ',
        }
    }
}

/// Renderer-agnostic interface. Reads a world, never mutates it.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    fn render(&self, world: &World) -> Self::Output;
}

/// Draws the grid as a bordered block of text, one line per row.
#[derive(Debug, Default, Clone)]
pub struct BoxTextRenderer {
    glyphs: Glyphs,
    header: bool,
}

impl BoxTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Prefix the grid with a `Generation N` line.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Draw a `size` x `size` grid given only an `is_alive(row, column)`
    /// query. Every line, including the last, ends in `\n`.
    pub fn render_grid(&self, size: usize, is_alive: impl Fn(usize, usize) -> bool) -> String {
        let g = &self.glyphs;
        // Borders plus newline on each of size + 2 lines.
        let mut out = String::with_capacity((size + 2) * (size + 3) * 3);

        out.push(g.top_left);
        out.extend(std::iter::repeat_n(g.horizontal, size));
        out.push(g.top_right);
        out.push('\n');

        for row in 0..size {
            out.push(g.vertical);
            for column in 0..size {
                out.push(if is_alive(row, column) { g.alive } else { g.dead });
            }
            out.push(g.vertical);
            out.push('\n');
        }

        out.push(g.bottom_left);
        out.extend(std::iter::repeat_n(g.horizontal, size));
        out.push(g.bottom_right);
        out.push('\n');
        out
    }
}

impl Renderer for BoxTextRenderer {
    type Output = String;

    fn render(&self, world: &World) -> String {
        let grid = self.render_grid(world.size(), |row, column| {
            world.is_alive(Cell::new(row, column))
        });
        if self.header {
            format!("Generation {}\n{grid}", world.generation())
        } else {
            grid
        }
    }
}

/// Machine-readable snapshot: generation, size, and sorted live cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    type Output = serde_json::Value;

    fn render(&self, world: &World) -> serde_json::Value {
        let alive: Vec<[usize; 2]> = world
            .alive_cells()
            .into_iter()
            .map(|c| [c.row, c.column])
            .collect();
        json!({
            "generation": world.generation(),
            "size": world.size(),
            "population": alive.len(),
            "alive": alive,
        })
    }
}
