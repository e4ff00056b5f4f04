use std::fmt;

use super::{Fill, RowView};
use crate::maze::Cell;

/// Blank columns printed left of the maze.
const MARGIN: &str = "     ";

/// Draws one row as a line maze:
///
/// ```text
///      ________________
///     |        |       |
///     |  ___   |  |  __|
///     |     |     |    |
///     |_____|__|__|____|
/// ```
///
/// A corner on the top line depends on the right wall of the cell above as
/// well as the cell below it, which is why the previous row is needed.
pub fn render_ascii(view: &RowView<'_>, fill: Fill, out: &mut impl fmt::Write) -> fmt::Result {
    let RowView {
        cells,
        previous,
        labels,
        is_first,
        is_last,
    } = *view;

    out.write_str(MARGIN)?;
    out.write_str(if is_first { " " } else { "|" })?;
    for (cell, above) in cells.iter().zip(previous) {
        out.write_str(if cell.contains(Cell::UP) { "  " } else { "__" })?;
        let corner = if above.contains(Cell::RIGHT) && !cell.contains(Cell::RIGHT) {
            " "
        } else if !is_first && !above.contains(Cell::RIGHT) {
            "|"
        } else {
            "_"
        };
        out.write_str(corner)?;
    }
    out.write_char('\n')?;

    out.write_str(MARGIN)?;
    out.write_char('|')?;
    for (cell, label) in cells.iter().zip(labels) {
        match fill {
            Fill::Blank => out.write_str("  ")?,
            Fill::Sets => write!(out, "{:>2}", label)?,
            Fill::Bits => write!(out, "{:>2}", cell.bits())?,
        }
        out.write_char(if cell.contains(Cell::RIGHT) { ' ' } else { '|' })?;
    }
    out.write_char('\n')?;

    if is_last {
        out.write_str(MARGIN)?;
        for cell in cells {
            out.write_char(if cell.contains(Cell::LEFT) { '_' } else { '|' })?;
            out.write_str("__")?;
        }
        out.write_str("|\n")?;
    }
    Ok(())
}
