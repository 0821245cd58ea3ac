use std::{fmt, ops::Add};

/// Cumulative edit cost of a table cell.
///
/// `Infinite` marks cells no alignment can reach. It orders above every
/// finite value, so it never wins a minimum against a reachable predecessor.
/// Adding to a finite cost saturates at the `i64` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    /// Reachable with this total cost.
    Finite(i64),
    /// Not reachable.
    Infinite,
}

impl Cost {
    /// Cost of the empty alignment.
    pub const ZERO: Cost = Cost::Finite(0);

    /// Finite value, if any.
    pub fn finite(self) -> Option<i64> {
        match self {
            Cost::Finite(cost) => Some(cost),
            Cost::Infinite => None,
        }
    }

    /// Whether the cost is the unreachable sentinel.
    pub fn is_infinite(self) -> bool {
        matches!(self, Cost::Infinite)
    }
}

impl Add<i64> for Cost {
    type Output = Cost;

    fn add(self, rhs: i64) -> Cost {
        match self {
            Cost::Finite(cost) => Cost::Finite(cost.saturating_add(rhs)),
            Cost::Infinite => Cost::Infinite,
        }
    }
}

impl From<i64> for Cost {
    fn from(cost: i64) -> Self {
        Cost::Finite(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(cost) => write!(f, "{cost}"),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

/// Predecessor that produced a cell's cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From `(i - 1, j - 1)`. Match or substitution.
    Diagonal,
    /// From `(i - 1, j)`. Query character against a gap.
    Down,
    /// From `(i, j - 1)`. Gap against a target character.
    Left,
}

/// One table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Best cost of reaching this cell.
    pub cost: Cost,
    /// Where `cost` came from.
    pub direction: Direction,
}

impl Cell {
    /// Placeholder for positions outside the band.
    pub const UNREACHABLE: Cell = Cell {
        cost: Cost::Infinite,
        direction: Direction::Diagonal,
    };

    /// Create a reachable cell.
    pub fn new(cost: i64, direction: Direction) -> Self {
        Self {
            cost: Cost::Finite(cost),
            direction,
        }
    }

    /// Pick the cheapest of the three candidates.
    ///
    /// Candidates are tried in the order `Left`, `Down`, `Diagonal` and each one
    /// replaces the current best when it is `<=` to it. On ties the priority is
    /// therefore `Diagonal > Down > Left`.
    ///
    /// # Arguments
    /// * `left` - Cost arriving from `(i, j - 1)`, indel already added.
    /// * `down` - Cost arriving from `(i - 1, j)`, indel already added.
    /// * `diagonal` - Cost arriving from `(i - 1, j - 1)`, match or substitution already added.
    pub fn best(left: Cost, down: Cost, diagonal: Cost) -> Self {
        let mut best = Cell {
            cost: left,
            direction: Direction::Left,
        };
        for (cost, direction) in [(down, Direction::Down), (diagonal, Direction::Diagonal)] {
            if cost <= best.cost {
                best = Cell { cost, direction };
            }
        }
        best
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cost_order() {
        assert!(Cost::Finite(-100) < Cost::Finite(3));
        assert!(Cost::Finite(i64::MAX) < Cost::Infinite);
        assert_eq!(Cost::Infinite + (-3), Cost::Infinite);
        assert_eq!(Cost::Finite(2) + 5, Cost::Finite(7));
    }

    #[test]
    fn test_cost_add_saturates() {
        assert_eq!(Cost::Finite(i64::MAX - 1) + 5, Cost::Finite(i64::MAX));
        assert_eq!(Cost::Finite(i64::MIN + 1) + (-5), Cost::Finite(i64::MIN));
        // Saturated costs stay reachable.
        assert!(Cost::Finite(i64::MAX) + 1 < Cost::Infinite);
    }

    #[test]
    fn test_cost_display() {
        assert_eq!(Cost::Finite(-12).to_string(), "-12");
        assert_eq!(Cost::Infinite.to_string(), "inf");
    }

    #[test]
    fn test_best_strict_minimum() {
        let cell = Cell::best(Cost::Finite(10), Cost::Finite(4), Cost::Finite(7));
        assert_eq!(cell, Cell::new(4, Direction::Down));

        let cell = Cell::best(Cost::Finite(1), Cost::Finite(4), Cost::Finite(7));
        assert_eq!(cell, Cell::new(1, Direction::Left));
    }

    #[test]
    fn test_best_tie_break() {
        // All equal: diagonal wins.
        let cell = Cell::best(Cost::Finite(5), Cost::Finite(5), Cost::Finite(5));
        assert_eq!(cell.direction, Direction::Diagonal);
        // Down beats left.
        let cell = Cell::best(Cost::Finite(5), Cost::Finite(5), Cost::Finite(9));
        assert_eq!(cell.direction, Direction::Down);
        // Diagonal beats left.
        let cell = Cell::best(Cost::Finite(5), Cost::Finite(9), Cost::Finite(5));
        assert_eq!(cell.direction, Direction::Diagonal);
    }

    #[test]
    fn test_best_skips_unreachable() {
        let cell = Cell::best(Cost::Infinite, Cost::Infinite, Cost::Finite(2));
        assert_eq!(cell, Cell::new(2, Direction::Diagonal));

        let cell = Cell::best(Cost::Finite(8), Cost::Infinite, Cost::Infinite);
        assert_eq!(cell, Cell::new(8, Direction::Left));
    }
}
