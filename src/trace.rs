//! Backtrace shared by both aligners.

use crate::{cell::Direction, cigar::EditOp};

/// A filled table that can answer which predecessor a cell came from.
///
/// Coordinates are always true coordinates: `row` is a query prefix length and
/// `col` a target prefix length, whatever the table stores internally.
pub trait Traceback {
    /// Direction recorded at `(row, col)`.
    ///
    /// # Panics
    /// * If `(row, col)` was never filled.
    fn direction(&self, row: usize, col: usize) -> Direction;
}

/// Walk recorded directions from `(query.len(), target.len())` back to `(0, 0)`.
///
/// # Returns
/// * Edit script in left-to-right order.
pub fn backtrace(table: &impl Traceback, query: &[char], target: &[char]) -> Vec<EditOp> {
    let (mut row, mut col) = (query.len(), target.len());
    let mut ops = Vec::with_capacity(row.max(col));

    while row > 0 || col > 0 {
        let op = match table.direction(row, col) {
            Direction::Diagonal => {
                row -= 1;
                col -= 1;
                if query[row] == target[col] {
                    EditOp::Match
                } else {
                    EditOp::Mismatch
                }
            }
            Direction::Down => {
                row -= 1;
                EditOp::Insert
            }
            Direction::Left => {
                col -= 1;
                EditOp::Delete
            }
        };
        ops.push(op);
    }

    // Collected end to start.
    ops.reverse();
    ops
}
