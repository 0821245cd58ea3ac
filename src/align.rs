use anyhow::Context;

use crate::{
    band::{self, BandTable},
    cell::Cost,
    cigar::{render, to_cigar, CigarFormat, EditOp},
    config::AlignConfig,
    mode::AlignMode,
    nw::NwTable,
    task::AlignTask,
    trace::{backtrace, Traceback},
};

/// Shown in place of both display strings when the band cannot reach the end.
pub const NO_ALIGNMENT: &str = "No Possible Alignment";

/// Sequence alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Total cost. [`Cost::Infinite`] if no alignment fits in the band.
    pub cost: Cost,
    /// Gapped query, clipped to [`AlignConfig::display_length`] characters.
    ///
    /// Empty for [`AlignTask::Distance`], [`NO_ALIGNMENT`] if infeasible.
    pub query_display: String,
    /// Gapped target, clipped like [`Alignment::query_display`].
    pub target_display: String,
    /// Full edit script from start to end of both sequences.
    ///
    /// Only present for [`AlignTask::Path`] and feasible alignments.
    pub ops: Option<Vec<EditOp>>,
}

/// Keep the first `len` characters of `display`.
///
/// ```
/// use rs_genalign::align::truncate_display;
///
/// assert_eq!(truncate_display("AC-GT", 3), "AC-");
/// assert_eq!(truncate_display("AC", 3), "AC");
/// ```
pub fn truncate_display(display: &str, len: usize) -> String {
    display.chars().take(len).collect()
}

impl Alignment {
    /// Aligns two sequences (query and target) returning an [`Alignment`].
    ///
    /// # Arguments
    /// * `config` - [`AlignConfig`] configuration.
    /// * `query` - First sequence. Rows of the table.
    /// * `target` - Second sequence. Columns of the table.
    ///
    /// Both sequences are clipped to [`AlignConfig::max_length`] characters first.
    ///
    /// ### Example
    /// ```
    /// use rs_genalign::{align::Alignment, cell::Cost, config::AlignConfig};
    ///
    /// let query: &str = "ATGC";
    /// let target: &str = "ATG";
    /// let align_res = Alignment::run(
    ///     AlignConfig::default(),
    ///     query,
    ///     target
    /// ).unwrap();
    ///
    /// assert_eq!(align_res.cost, Cost::Finite(-4));
    /// assert_eq!(align_res.query_display, "ATGC");
    /// assert_eq!(align_res.target_display, "ATG-");
    /// ```
    pub fn run(
        config: AlignConfig,
        query: impl AsRef<str>,
        target: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        config
            .validate()
            .context("Invalid alignment configuration")?;

        let query: Vec<char> = query.as_ref().chars().take(config.max_length).collect();
        let target: Vec<char> = target.as_ref().chars().take(config.max_length).collect();
        log::debug!(
            "Aligning {} x {} characters ({:?}, {:?})",
            query.len(),
            target.len(),
            config.mode,
            config.task
        );

        match config.mode {
            AlignMode::Unrestricted => {
                let table = NwTable::fill(&config.scoring, &query, &target);
                Ok(Self::finish(&config, table.cost(), &table, &query, &target))
            }
            AlignMode::Banded => {
                if !band::feasible(query.len(), target.len(), config.band_tolerance) {
                    log::debug!(
                        "Lengths {} and {} differ by {} or more, no banded alignment",
                        query.len(),
                        target.len(),
                        config.band_tolerance
                    );
                    return Ok(Self::infeasible());
                }

                let table = BandTable::fill(
                    &config.scoring,
                    config.band_tolerance,
                    &query,
                    &target,
                );
                match table.cost() {
                    Some(cost) => Ok(Self::finish(&config, cost, &table, &query, &target)),
                    None => {
                        log::debug!("Band does not reach the end of the target");
                        Ok(Self::infeasible())
                    }
                }
            }
        }
    }

    /// Result for sequences the band cannot bridge.
    fn infeasible() -> Self {
        Alignment {
            cost: Cost::Infinite,
            query_display: NO_ALIGNMENT.to_owned(),
            target_display: NO_ALIGNMENT.to_owned(),
            ops: None,
        }
    }

    fn finish(
        config: &AlignConfig,
        cost: Cost,
        table: &impl Traceback,
        query: &[char],
        target: &[char],
    ) -> Self {
        if config.task == AlignTask::Distance {
            return Alignment {
                cost,
                query_display: String::new(),
                target_display: String::new(),
                ops: None,
            };
        }

        let ops = backtrace(table, query, target);
        let (query_line, target_line) = render(&ops, query, target);
        log::trace!("Reconstructed {} alignment columns", ops.len());

        Alignment {
            cost,
            query_display: truncate_display(&query_line, config.display_length),
            target_display: truncate_display(&target_line, config.display_length),
            ops: Some(ops),
        }
    }

    /// Whether an alignment was found.
    pub fn is_feasible(&self) -> bool {
        !self.cost.is_infinite()
    }

    /// Full edit script as a CIGAR string, if it was reconstructed.
    pub fn cigar(&self, format: CigarFormat) -> Option<String> {
        self.ops.as_deref().map(|ops| to_cigar(ops, format))
    }
}

/// Align with the default scoring, band tolerance and display length.
///
/// ### Example
/// ```
/// use rs_genalign::{align::align, cell::Cost};
///
/// let res = align("ATGC", "ATGC", false, 4).unwrap();
/// assert_eq!(res.cost, Cost::Finite(-12));
/// assert_eq!(res.query_display, "ATGC");
/// assert_eq!(res.target_display, "ATGC");
/// ```
pub fn align(
    query: impl AsRef<str>,
    target: impl AsRef<str>,
    banded: bool,
    max_length: usize,
) -> anyhow::Result<Alignment> {
    Alignment::run(
        AlignConfig {
            mode: banded.into(),
            max_length,
            ..Default::default()
        },
        query,
        target,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{error::ConfigError, scoring::Scoring};

    #[test]
    fn test_identical_unrestricted() {
        const SEQ: &str = "ATGC";
        let res = align(SEQ, SEQ, false, 4).unwrap();
        assert_eq!(res.cost, Cost::Finite(-12));
        assert_eq!(res.query_display, SEQ);
        assert_eq!(res.target_display, SEQ);
        assert_eq!(res.cigar(CigarFormat::Extended).as_deref(), Some("4="));
    }

    #[test]
    fn test_trailing_deletion() {
        let res = align("ATGC", "ATG", false, 4).unwrap();
        assert_eq!(res.cost, Cost::Finite(-4));
        assert_eq!(res.query_display, "ATGC");
        assert_eq!(res.target_display, "ATG-");
        assert_eq!(res.cigar(CigarFormat::Standard).as_deref(), Some("3M1I"));
    }

    #[test]
    fn test_banded_equals_unrestricted() {
        const QUERY: &str = "GATTACAGATTACA";
        const TARGET: &str = "GATACAGATTTACA";
        let full = align(QUERY, TARGET, false, 100).unwrap();
        let band = align(QUERY, TARGET, true, 100).unwrap();
        assert_eq!(full.cost, band.cost);
        assert!(band.is_feasible());
    }

    #[test]
    fn test_banded_infeasible() {
        let res = align("ATGCATGC", "ATGCA", true, 100).unwrap();
        assert_eq!(res.cost, Cost::Infinite);
        assert!(!res.is_feasible());
        assert_eq!(res.query_display, NO_ALIGNMENT);
        assert_eq!(res.target_display, NO_ALIGNMENT);
        assert_eq!(res.cigar(CigarFormat::Standard), None);
    }

    #[test]
    fn test_max_length_clips_inputs() {
        // Only "ATG" of each is aligned.
        let res = align("ATGCCCC", "ATGAAAAAAAAA", true, 3).unwrap();
        assert_eq!(res.cost, Cost::Finite(-9));
        assert_eq!(res.query_display, "ATG");
        assert_eq!(res.target_display, "ATG");
    }

    #[test]
    fn test_display_is_clipped() {
        let seq = "ACGT".repeat(40);
        let res = align(&seq, &seq, false, 1000).unwrap();
        assert_eq!(res.cost, Cost::Finite(-3 * 160));
        assert_eq!(res.query_display.len(), 100);
        assert_eq!(res.query_display, seq[..100]);
        assert_eq!(res.ops.map(|ops| ops.len()), Some(160));
    }

    #[test]
    fn test_distance_task_skips_backtrace() {
        let config = AlignConfig {
            task: AlignTask::Distance,
            mode: AlignMode::Banded,
            ..Default::default()
        };
        let res = Alignment::run(config, "ATGC", "ATG").unwrap();
        assert_eq!(res.cost, Cost::Finite(-4));
        assert!(res.query_display.is_empty());
        assert!(res.target_display.is_empty());
        assert_eq!(res.ops, None);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let config = AlignConfig {
            scoring: Scoring::new(-3, 1, -5),
            ..Default::default()
        };
        let err = Alignment::run(config, "A", "A").unwrap_err();
        assert_eq!(err.to_string(), "Invalid alignment configuration");
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::NonPositiveIndel(-5))
        );
        assert!(format!("{err:#}").contains("Indel cost must be positive"));
    }

    #[test]
    fn test_huge_indel_cost_saturates() {
        let config = AlignConfig {
            scoring: Scoring::new(-3, 1, i64::MAX / 2),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        // Two indels and two substitutions, clamped at the top of the range.
        let res = Alignment::run(config, "AAAA", "CC").unwrap();
        assert_eq!(res.cost, Cost::Finite(i64::MAX));
        assert!(res.is_feasible());
        assert!(res.ops.is_some());
    }

    #[test]
    fn test_empty_inputs() {
        let res = align("", "", true, 10).unwrap();
        assert_eq!(res.cost, Cost::ZERO);
        assert_eq!(res.query_display, "");

        let res = align("AC", "", false, 10).unwrap();
        assert_eq!(res.cost, Cost::Finite(10));
        assert_eq!(res.query_display, "AC");
        assert_eq!(res.target_display, "--");
    }
}
