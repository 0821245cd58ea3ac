/// Fixed costs used by both aligners.
///
/// Lower is better. A match lowers the running cost, substitutions and
/// indels raise it.
///
/// ### Example
/// ```
/// use rs_genalign::scoring::Scoring;
///
/// let scoring = Scoring::default();
/// assert_eq!(scoring.diagonal('A', 'A'), -3);
/// assert_eq!(scoring.diagonal('A', 'C'), 1);
/// assert_eq!(scoring.indel, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    /// Cost of a diagonal step over equal characters. Negative.
    pub match_bonus: i64,
    /// Cost of a diagonal step over unequal characters.
    pub substitution: i64,
    /// Cost of an insertion or deletion.
    pub indel: i64,
}

impl Default for Scoring {
    /// Match `-3`, substitution `1`, indel `5`.
    fn default() -> Self {
        Self {
            match_bonus: -3,
            substitution: 1,
            indel: 5,
        }
    }
}

impl Scoring {
    /// Create a new scoring scheme.
    pub fn new(match_bonus: i64, substitution: i64, indel: i64) -> Self {
        Self {
            match_bonus,
            substitution,
            indel,
        }
    }

    /// Cost of aligning `a` against `b` on the diagonal.
    pub fn diagonal(&self, a: char, b: char) -> i64 {
        if a == b {
            self.match_bonus
        } else {
            self.substitution
        }
    }

    /// Cost of `n` consecutive indels. Base row and column of both tables.
    ///
    /// Saturates at `i64::MAX`.
    pub fn gaps(&self, n: usize) -> i64 {
        self.indel.saturating_mul(i64::try_from(n).unwrap_or(i64::MAX))
    }
}
