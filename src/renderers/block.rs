use std::fmt;

use crate::maze::Cell;

/// Draws one row with `X` blocks. Each cell owns its top and left wall; the
/// right edge of the maze and, on the last row, the bottom edge are closed off.
///
/// ```text
/// XXXXXXXXX
/// X       X
/// X XXX X X
/// X   X X X
/// XXXXXXXXX
/// ```
pub fn render_block(row: &[Cell], is_last: bool, out: &mut impl fmt::Write) -> fmt::Result {
    for cell in row {
        out.write_str(if cell.contains(Cell::UP) { "X " } else { "XX" })?;
    }
    out.write_str("X\n")?;

    for cell in row {
        out.write_str(if cell.contains(Cell::LEFT) { "  " } else { "X " })?;
    }
    out.write_str("X\n")?;

    if is_last {
        for _ in row {
            out.write_str("XX")?;
        }
        out.write_str("X\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_first_row() {
        let row = [Cell::RIGHT | Cell::DOWN, Cell::LEFT, Cell::DOWN];
        let mut out = String::new();
        render_block(&row, false, &mut out).unwrap();
        assert_eq!(out, "XXXXXXX\nX   X X\n");
    }

    #[test]
    fn test_render_last_row() {
        let row = [Cell::UP | Cell::RIGHT, Cell::LEFT | Cell::UP];
        let mut out = String::new();
        render_block(&row, true, &mut out).unwrap();
        assert_eq!(out, "X X X\nX   X\nXXXXX\n");
    }
}
