/// Gap marker used in display strings.
pub const GAP: char = '-';

/// Describes CIGAR format.
/// * See http://samtools.github.io/hts-specs/SAMv1.pdf
/// * See http://drive5.com/usearch/manual/cigar.html
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CigarFormat {
    #[default]
    /// Match: 'M', Insertion: 'I', Deletion: 'D', Mismatch: 'M'.
    Standard,
    /// Match: '=', Insertion: 'I', Deletion: 'D', Mismatch: 'X'.
    Extended,
}

/// One column of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Match
    Match,
    /// Insertion to query = deletion from target.
    ///
    /// ### Example:
    /// * Query:  `ATCG`
    /// * Target: `A-CG`
    Insert,
    /// Deletion from query = insertion to target.
    ///
    /// ### Example:
    /// * Query:  `A-CG`
    /// * Target: `ATCG`
    Delete,
    /// Mismatch
    Mismatch,
}

impl EditOp {
    /// CIGAR symbol for this operation.
    pub fn symbol(&self, format: CigarFormat) -> char {
        match (self, format) {
            (EditOp::Match | EditOp::Mismatch, CigarFormat::Standard) => 'M',
            (EditOp::Match, CigarFormat::Extended) => '=',
            (EditOp::Mismatch, CigarFormat::Extended) => 'X',
            (EditOp::Insert, _) => 'I',
            (EditOp::Delete, _) => 'D',
        }
    }

    /// Whether the op consumes a query character.
    pub fn consumes_query(&self) -> bool {
        !matches!(self, EditOp::Delete)
    }

    /// Whether the op consumes a target character.
    pub fn consumes_target(&self) -> bool {
        !matches!(self, EditOp::Insert)
    }
}

/// Run-length encode `ops` as a CIGAR string.
///
/// ### Example
/// ```
/// use rs_genalign::cigar::{to_cigar, CigarFormat, EditOp};
///
/// let ops = [EditOp::Match, EditOp::Mismatch, EditOp::Match, EditOp::Insert];
/// assert_eq!(to_cigar(&ops, CigarFormat::Standard), "3M1I");
/// assert_eq!(to_cigar(&ops, CigarFormat::Extended), "1=1X1=1I");
/// ```
pub fn to_cigar(ops: &[EditOp], format: CigarFormat) -> String {
    let mut cigar = String::new();
    let mut run: Option<(char, usize)> = None;

    for symbol in ops.iter().map(|op| op.symbol(format)) {
        run = match run {
            Some((last, n)) if last == symbol => Some((last, n + 1)),
            Some((last, n)) => {
                cigar.push_str(&format!("{n}{last}"));
                Some((symbol, 1))
            }
            None => Some((symbol, 1)),
        };
    }
    if let Some((last, n)) = run {
        cigar.push_str(&format!("{n}{last}"));
    }
    cigar
}

/// Lay `query` and `target` out along `ops`, filling gaps with [`GAP`].
///
/// # Arguments
/// * `ops` - Edit script in left-to-right order.
/// * `query` - Sequence consumed by `Match`, `Mismatch` and `Insert`.
/// * `target` - Sequence consumed by `Match`, `Mismatch` and `Delete`.
///
/// # Returns
/// * Gapped query and target, both `ops.len()` characters long.
///
/// # Panics
/// * If `ops` consumes more characters than either sequence has.
pub fn render(ops: &[EditOp], query: &[char], target: &[char]) -> (String, String) {
    let mut query_iter = query.iter();
    let mut target_iter = target.iter();
    let mut query_line = String::with_capacity(ops.len());
    let mut target_line = String::with_capacity(ops.len());

    fn next(iter: &mut std::slice::Iter<'_, char>, consumes: bool, side: &str) -> char {
        if !consumes {
            return GAP;
        }
        match iter.next() {
            Some(c) => *c,
            None => panic!("Edit script runs past the end of the {side}."),
        }
    }

    for op in ops {
        query_line.push(next(&mut query_iter, op.consumes_query(), "query"));
        target_line.push(next(&mut target_iter, op.consumes_target(), "target"));
    }
    (query_line, target_line)
}
