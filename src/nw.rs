//! Unrestricted aligner over the full `(n + 1) x (m + 1)` table.

use std::ops::{Index, IndexMut};

use crate::{
    cell::{Cell, Cost, Direction},
    scoring::Scoring,
    trace::Traceback,
};

/// Full cost/direction table.
///
/// Row `i` holds query prefixes of length `i`, column `j` target prefixes of
/// length `j`. Owned by a single alignment call.
#[derive(Debug, Clone)]
pub struct NwTable {
    cols: usize,
    cells: Vec<Cell>,
}

impl NwTable {
    /// Fill the table for `query` (rows) against `target` (columns).
    ///
    /// ### Example
    /// ```
    /// use rs_genalign::{cell::Cost, nw::NwTable, scoring::Scoring};
    ///
    /// let query: Vec<char> = "ATGC".chars().collect();
    /// let target: Vec<char> = "ATG".chars().collect();
    /// let table = NwTable::fill(&Scoring::default(), &query, &target);
    /// // Three matches and one indel.
    /// assert_eq!(table.cost(), Cost::Finite(-4));
    /// ```
    pub fn fill(scoring: &Scoring, query: &[char], target: &[char]) -> Self {
        let (rows, cols) = (query.len() + 1, target.len() + 1);
        log::trace!("Filling {rows}x{cols} alignment table");

        let mut table = NwTable {
            cols,
            cells: vec![Cell::UNREACHABLE; rows * cols],
        };

        for col in 0..cols {
            table[(0, col)] = Cell::new(scoring.gaps(col), Direction::Left);
        }
        for row in 1..rows {
            table[(row, 0)] = Cell::new(scoring.gaps(row), Direction::Down);
        }

        for (row, &a) in (1..rows).zip(query) {
            for (col, &b) in (1..cols).zip(target) {
                table[(row, col)] = Cell::best(
                    table[(row, col - 1)].cost + scoring.indel,
                    table[(row - 1, col)].cost + scoring.indel,
                    table[(row - 1, col - 1)].cost + scoring.diagonal(a, b),
                );
            }
        }
        table
    }

    /// Number of rows, `query.len() + 1`.
    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    /// Number of columns, `target.len() + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cost of aligning the whole query against the whole target.
    pub fn cost(&self) -> Cost {
        self[(self.rows() - 1, self.cols - 1)].cost
    }
}

/// Index into `NwTable` by (row, col).
impl Index<(usize, usize)> for NwTable {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        assert!(col < self.cols, "Column {col} out of range {}", self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for NwTable {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        assert!(col < self.cols, "Column {col} out of range {}", self.cols);
        &mut self.cells[row * self.cols + col]
    }
}

impl Traceback for NwTable {
    fn direction(&self, row: usize, col: usize) -> Direction {
        self[(row, col)].direction
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_base_cases() {
        let table = NwTable::fill(&Scoring::default(), &chars("AC"), &chars("GTA"));
        assert_eq!(table.rows(), 3);
        assert_eq!(table.cols(), 4);

        for col in 0..4 {
            assert_eq!(table[(0, col)], Cell::new(5 * col as i64, Direction::Left));
        }
        for row in 1..3 {
            assert_eq!(table[(row, 0)], Cell::new(5 * row as i64, Direction::Down));
        }
    }

    #[test]
    fn test_fill_small_table() {
        /*
        Query "AT" (rows) against target "AG" (columns), match -3, sub 1, indel 5.

                 -    A    G
            -    0L   5L  10L
            A    5D  -3G   2L
            T   10D   2D  -2G

        G = diagonal, D = down, L = left.
        */
        let table = NwTable::fill(&Scoring::default(), &chars("AT"), &chars("AG"));

        assert_eq!(table[(1, 1)], Cell::new(-3, Direction::Diagonal));
        assert_eq!(table[(1, 2)], Cell::new(2, Direction::Left));
        assert_eq!(table[(2, 1)], Cell::new(2, Direction::Down));
        assert_eq!(table[(2, 2)], Cell::new(-2, Direction::Diagonal));
        assert_eq!(table.cost(), Cost::Finite(-2));
    }

    #[test]
    fn test_tie_prefers_diagonal_then_down() {
        // Match 0, sub 10, indel 5: a substitution ties with an indel pair.
        let scoring = Scoring::new(0, 10, 5);
        let table = NwTable::fill(&scoring, &chars("A"), &chars("C"));
        // left = 5 + 5, down = 5 + 5, diag = 0 + 10.
        assert_eq!(table[(1, 1)], Cell::new(10, Direction::Diagonal));

        let scoring = Scoring::new(0, 11, 5);
        let table = NwTable::fill(&scoring, &chars("A"), &chars("C"));
        assert_eq!(table[(1, 1)], Cell::new(10, Direction::Down));
    }

    #[test]
    fn test_empty_sequences() {
        let scoring = Scoring::default();
        assert_eq!(NwTable::fill(&scoring, &[], &[]).cost(), Cost::ZERO);
        assert_eq!(
            NwTable::fill(&scoring, &chars("ACG"), &[]).cost(),
            Cost::Finite(15)
        );
        assert_eq!(
            NwTable::fill(&scoring, &[], &chars("AC")).cost(),
            Cost::Finite(10)
        );
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let table = NwTable::fill(&Scoring::default(), &chars("A"), &chars("A"));
        let _cell = table[(0, 2)];
    }
}
