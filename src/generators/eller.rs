use rand::{Rng, rngs::StdRng};

use crate::{
    generators::get_rng,
    maze::{Cell, RowSets},
};

/// Row-at-a-time perfect maze generator (Eller's algorithm).
///
/// Only the row being built and the row before it are kept, so memory stays
/// proportional to the width no matter how tall the maze gets.
pub struct Eller {
    row: Box<[Cell]>,
    /// Copy of the row as it was before the latest call to `generate_row`.
    previous: Box<[Cell]>,
    sets: RowSets,
    rng: StdRng,
    rows_done: usize,
}

impl Eller {
    pub fn new(width: usize, seed: Option<u64>) -> Self {
        Self::with_rng(width, get_rng(seed))
    }

    pub fn with_rng(width: usize, rng: StdRng) -> Self {
        Eller {
            row: vec![Cell::CLOSED; width].into_boxed_slice(),
            previous: vec![Cell::CLOSED; width].into_boxed_slice(),
            sets: RowSets::new(width),
            rng,
            rows_done: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.row.len()
    }

    /// Passages of the most recently generated row.
    pub fn row(&self) -> &[Cell] {
        &self.row
    }

    /// Passages of the row generated before the current one. All closed until
    /// the second row has been generated.
    pub fn previous_row(&self) -> &[Cell] {
        &self.previous
    }

    pub fn labels(&self) -> &[u32] {
        self.sets.labels()
    }

    /// Number of rows generated so far.
    pub fn rows_done(&self) -> usize {
        self.rows_done
    }

    /// Builds the next row in place from the state left by the previous call.
    ///
    /// The last row is closed off so every column ends up in one set, which
    /// makes the whole maze a single spanning tree.
    pub fn generate_row(&mut self, is_last: bool) {
        self.start_row();
        self.carve(is_last);
        if is_last {
            self.close_last_row();
            debug_assert!(self.width() == 0 || self.sets.set_count() == 1);
        } else {
            self.force_descents();
            debug_assert!(self.every_set_descends());
        }
        self.rows_done += 1;
        tracing::debug!(
            "[eller] row {} done with {} set(s)",
            self.rows_done - 1,
            self.sets.set_count()
        );
    }

    /// Cells entered from above keep their set and only their `UP` passage;
    /// every other cell starts closed in a set of its own.
    fn start_row(&mut self) {
        self.previous.copy_from_slice(&self.row);
        let previous = &self.previous;
        self.sets.renew(|col| previous[col].contains(Cell::DOWN));
        for (cell, above) in self.row.iter_mut().zip(self.previous.iter()) {
            *cell = if above.contains(Cell::DOWN) {
                Cell::UP
            } else {
                Cell::CLOSED
            };
        }
    }

    /// Random horizontal joins between different sets, and random descents.
    ///
    /// Each column draws its join coin then its descent coin, even where the
    /// outcome cannot be used, so a seed always replays the same maze. Joins
    /// merge sets immediately because later columns test against the merged
    /// state.
    fn carve(&mut self, is_last: bool) {
        for col in 0..self.width() {
            let join = self.rng.random_bool(0.5);
            if join && col > 0 && !self.sets.same_set(col - 1, col) {
                self.row[col] |= Cell::LEFT;
                self.row[col - 1] |= Cell::RIGHT;
                self.sets.merge(col, col - 1);
            }
            let descend = self.rng.random_bool(0.5);
            if descend && !is_last {
                self.row[col] |= Cell::DOWN;
            }
        }
    }

    /// Every set must leave at least one passage down, otherwise the rows
    /// below could never reach it.
    fn force_descents(&mut self) {
        for col in 0..self.width() {
            if self.row[col].contains(Cell::DOWN) {
                continue;
            }
            let descends = self
                .sets
                .members(col)
                .any(|member| self.row[member].contains(Cell::DOWN));
            if !descends {
                tracing::trace!("[eller] forcing descent at column {}", col);
                self.row[col] |= Cell::DOWN;
            }
        }
    }

    /// Joins every pair of neighbours still in different sets.
    fn close_last_row(&mut self) {
        for col in 1..self.width() {
            if self.sets.same_set(col - 1, col) {
                continue;
            }
            tracing::trace!("[eller] closing columns {} and {}", col - 1, col);
            self.row[col - 1] |= Cell::RIGHT;
            self.row[col] |= Cell::LEFT;
            self.sets.merge(col, col - 1);
        }
    }

    fn every_set_descends(&self) -> bool {
        (0..self.width()).all(|col| {
            self.sets
                .members(col)
                .any(|member| self.row[member].contains(Cell::DOWN))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generates a whole maze, keeping every row.
    fn generate(width: usize, height: usize, seed: u64) -> Vec<Vec<Cell>> {
        let mut eller = Eller::new(width, Some(seed));
        (0..height)
            .map(|y| {
                eller.generate_row(y + 1 == height);
                eller.row().to_vec()
            })
            .collect()
    }

    fn count_passages(rows: &[Vec<Cell>]) -> usize {
        rows.iter()
            .flatten()
            .map(|cell| {
                cell.contains(Cell::RIGHT) as usize + cell.contains(Cell::DOWN) as usize
            })
            .sum()
    }

    fn reachable(rows: &[Vec<Cell>]) -> usize {
        let (height, width) = (rows.len(), rows[0].len());
        let mut seen = vec![vec![false; width]; height];
        let mut stack = vec![(0, 0)];
        seen[0][0] = true;
        let mut count = 0;
        while let Some((x, y)) = stack.pop() {
            count += 1;
            let cell = rows[y][x];
            let neighbors = [
                (cell.contains(Cell::UP), x, y.wrapping_sub(1)),
                (cell.contains(Cell::DOWN), x, y + 1),
                (cell.contains(Cell::LEFT), x.wrapping_sub(1), y),
                (cell.contains(Cell::RIGHT), x + 1, y),
            ];
            for (open, nx, ny) in neighbors {
                if open && ny < height && nx < width && !seen[ny][nx] {
                    seen[ny][nx] = true;
                    stack.push((nx, ny));
                }
            }
        }
        count
    }

    #[test]
    fn test_perfect_maze() {
        for seed in 0..20 {
            let rows = generate(12, 9, seed);
            assert_eq!(count_passages(&rows), 12 * 9 - 1, "seed {seed}");
            assert_eq!(reachable(&rows), 12 * 9, "seed {seed}");
        }
    }

    #[test]
    fn test_passages_are_mirrored() {
        let rows = generate(10, 10, 7);
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if x + 1 < row.len() {
                    assert_eq!(cell.contains(Cell::RIGHT), row[x + 1].contains(Cell::LEFT));
                }
                if let Some(below) = rows.get(y + 1) {
                    assert_eq!(cell.contains(Cell::DOWN), below[x].contains(Cell::UP));
                }
            }
        }
        assert!(!rows[0][0].contains(Cell::LEFT));
        assert!(rows[0].iter().all(|cell| !cell.contains(Cell::UP)));
        assert!(rows[9].iter().all(|cell| !cell.contains(Cell::DOWN)));
        assert!(!rows[9][9].contains(Cell::RIGHT));
    }

    #[test]
    fn test_every_set_descends() {
        let mut eller = Eller::new(15, Some(3));
        for _ in 0..30 {
            eller.generate_row(false);
            assert!(eller.every_set_descends());
        }
    }

    #[test]
    fn test_last_row_single_set() {
        for seed in 0..10 {
            let mut eller = Eller::new(8, Some(seed));
            (0..4).for_each(|y| eller.generate_row(y == 3));
            assert_eq!(eller.sets.set_count(), 1);
            assert!(eller.labels().iter().all(|&l| l == eller.labels()[0]));
        }
    }

    #[test]
    fn test_single_column_corridor() {
        let rows = generate(1, 5, 11);
        for row in &rows[..4] {
            assert!(row[0].contains(Cell::DOWN));
        }
        assert_eq!(rows[4][0], Cell::UP);
        assert_eq!(count_passages(&rows), 4);
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        assert_eq!(generate(3, 2, 1), generate(3, 2, 1));
        let rows = generate(3, 2, 1);
        assert_eq!(count_passages(&rows), 5);
        assert_eq!(reachable(&rows), 6);
    }

    #[test]
    fn test_previous_row_is_kept() {
        let mut eller = Eller::new(6, Some(5));
        eller.generate_row(false);
        assert!(eller.previous_row().iter().all(|&c| c == Cell::CLOSED));
        let first = eller.row().to_vec();
        eller.generate_row(true);
        assert_eq!(eller.previous_row(), first.as_slice());
        assert_eq!(eller.rows_done(), 2);
    }

    #[test]
    fn test_single_row_maze_is_a_corridor() {
        let rows = generate(5, 1, 2);
        let expected = [
            Cell::RIGHT,
            Cell::LEFT | Cell::RIGHT,
            Cell::LEFT | Cell::RIGHT,
            Cell::LEFT | Cell::RIGHT,
            Cell::LEFT,
        ];
        assert_eq!(rows[0], expected);
    }

    #[test]
    fn test_zero_width_is_noop() {
        let mut eller = Eller::new(0, Some(1));
        eller.generate_row(false);
        eller.generate_row(true);
        assert!(eller.row().is_empty());
    }
}
