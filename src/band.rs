//! Banded aligner.
//!
//! Only cells with `|row - col| <= d` are stored, `k = 2d + 1` per row. Cell
//! `(row, col)` lives at band-local index `col - row + d`, so the origin sits at
//! local index `d` of row 0 and the mapping slides one column right per row.

use std::ops::{Index, Range};

use crate::{
    cell::{Cell, Cost, Direction},
    scoring::Scoring,
    trace::Traceback,
};

/// Whether lengths `query_len` and `target_len` can be aligned with tolerance `d`.
///
/// The band is only trusted while the lengths differ by strictly less than `d`.
///
/// ### Example
/// ```
/// use rs_genalign::band::feasible;
///
/// assert!(feasible(10, 8, 3));
/// assert!(!feasible(10, 7, 3));
/// ```
pub fn feasible(query_len: usize, target_len: usize, tolerance: usize) -> bool {
    query_len.abs_diff(target_len) < tolerance
}

/// Contiguous run of target columns inside the band at one row.
///
/// * Ramp-up, `row < d`: starts at column 0 and widens by one per row.
/// * Steady, full width `k`: slides right by one per row.
/// * Ramp-down, `row + d > target_len`: clipped at `target_len`, narrows by one per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandWindow {
    /// First target column in the band.
    pub start: usize,
    /// Number of columns in the band.
    pub width: usize,
}

impl BandWindow {
    /// Window at `row`. `None` once the band has moved past `target_len`.
    pub fn at(row: usize, tolerance: usize, target_len: usize) -> Option<Self> {
        let start = row.saturating_sub(tolerance);
        let end = (row + tolerance).min(target_len);
        (start <= end).then(|| BandWindow {
            start,
            width: end - start + 1,
        })
    }

    /// Last target column in the band.
    pub fn end(&self) -> usize {
        self.start + self.width - 1
    }

    /// Target columns in the band.
    pub fn cols(&self) -> Range<usize> {
        self.start..self.start + self.width
    }

    /// Whether target column `col` is in the band.
    pub fn contains(&self, col: usize) -> bool {
        self.cols().contains(&col)
    }
}

/// Cost/direction table restricted to the band.
#[derive(Debug, Clone)]
pub struct BandTable {
    tolerance: usize,
    width: usize,
    rows: usize,
    target_len: usize,
    cells: Vec<Cell>,
}

impl BandTable {
    /// Fill the band for `query` (rows) against `target` (columns).
    ///
    /// # Arguments
    /// * `scoring` - Costs, [`Scoring`].
    /// * `tolerance` - Half-width `d` of the band.
    /// * `query` - First sequence.
    /// * `target` - Second sequence.
    ///
    /// Rows past the point where the band leaves the target are left unreachable.
    pub fn fill(scoring: &Scoring, tolerance: usize, query: &[char], target: &[char]) -> Self {
        let width = 2 * tolerance + 1;
        let rows = query.len() + 1;
        log::trace!("Filling {rows}x{width} band table (tolerance {tolerance})");

        let mut table = BandTable {
            tolerance,
            width,
            rows,
            target_len: target.len(),
            cells: vec![Cell::UNREACHABLE; rows * width],
        };

        for row in 0..rows {
            let Some(window) = table.window(row) else {
                log::trace!("Band leaves the target at row {row}");
                break;
            };
            assert!(
                window.end() <= target.len() && window.width <= width,
                "Band window {window:?} escapes target of length {}",
                target.len()
            );

            for col in window.cols() {
                let cell = match (row, col) {
                    (0, _) => Cell::new(scoring.gaps(col), Direction::Left),
                    (_, 0) => Cell::new(scoring.gaps(row), Direction::Down),
                    _ => Cell::best(
                        table.cost_at(row, col - 1) + scoring.indel,
                        table.cost_at(row - 1, col) + scoring.indel,
                        table.cost_at(row - 1, col - 1)
                            + scoring.diagonal(query[row - 1], target[col - 1]),
                    ),
                };
                let local = table.local(row, col);
                table.cells[row * width + local] = cell;
            }
        }
        table
    }

    /// Band window at `row`.
    pub fn window(&self, row: usize) -> Option<BandWindow> {
        if row >= self.rows {
            return None;
        }
        BandWindow::at(row, self.tolerance, self.target_len)
    }

    /// Cells stored per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Band-local index of an in-band target column.
    fn local(&self, row: usize, col: usize) -> usize {
        match (col + self.tolerance).checked_sub(row) {
            Some(local) if local < self.width => local,
            _ => panic!("({row}, {col}) lies outside the band"),
        }
    }

    /// Cell at true coordinates, if `(row, col)` is in the band.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        let window = self.window(row)?;
        window
            .contains(col)
            .then(|| &self.cells[row * self.width + self.local(row, col)])
    }

    /// Cost at true coordinates. Outside the band counts as unreachable.
    fn cost_at(&self, row: usize, col: usize) -> Cost {
        self.get(row, col).map_or(Cost::Infinite, |cell| cell.cost)
    }

    /// Cost of aligning the whole query against the whole target.
    ///
    /// # Returns
    /// * `None` if the lengths are too far apart or the last row's band misses the end of the target.
    pub fn cost(&self) -> Option<Cost> {
        let last = self.rows - 1;
        if !feasible(last, self.target_len, self.tolerance) {
            return None;
        }
        self.get(last, self.target_len)
            .map(|cell| cell.cost)
            .filter(|cost| !cost.is_infinite())
    }
}

/// Index into `BandTable` by true (row, col).
impl Index<(usize, usize)> for BandTable {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        match self.get(row, col) {
            Some(cell) => cell,
            None => panic!("({row}, {col}) lies outside the band"),
        }
    }
}

impl Traceback for BandTable {
    fn direction(&self, row: usize, col: usize) -> Direction {
        self[(row, col)].direction
    }
}
