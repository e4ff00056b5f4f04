use std::fmt;

use crate::maze::Cell;

mod ascii;
mod block;

pub use ascii::render_ascii;
pub use block::render_block;

/// Output layout of a maze.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Line-drawn maze with `_` and `|` walls.
    #[default]
    Ascii,
    /// Maze drawn with `X` blocks, one shared wall column per cell.
    Block,
}

/// What to print inside ASCII cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    #[default]
    Blank,
    /// The set label of each column.
    Sets,
    /// The raw passage bitmask of each cell.
    Bits,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Ascii => write!(f, "ASCII"),
            Format::Block => write!(f, "Block"),
        }
    }
}

/// Everything a renderer may look at for one row.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    pub cells: &'a [Cell],
    pub previous: &'a [Cell],
    pub labels: &'a [u32],
    pub is_first: bool,
    pub is_last: bool,
}

impl Format {
    /// Appends the text of one row. `fill` only affects the ASCII layout.
    pub fn render_row(
        &self,
        view: &RowView<'_>,
        fill: Fill,
        out: &mut impl fmt::Write,
    ) -> fmt::Result {
        match self {
            Format::Ascii => render_ascii(view, fill, out),
            Format::Block => render_block(view.cells, view.is_last, out),
        }
    }
}
