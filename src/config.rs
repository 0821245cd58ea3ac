use crate::{error::ConfigError, mode::AlignMode, scoring::Scoring, task::AlignTask};

/// Characters kept from the start of each reconstructed alignment.
pub const DEFAULT_DISPLAY_LENGTH: usize = 100;

/// Half-width of the band around the main diagonal.
pub const DEFAULT_BAND_TOLERANCE: usize = 3;

#[derive(Debug, Clone)]
/// Alignment configuration.
pub struct AlignConfig {
    /// Alignment method, [`AlignMode`].
    pub mode: AlignMode,
    /// Alignment task, [`AlignTask`].
    pub task: AlignTask,
    /// Costs of match, substitution and indel, [`Scoring`].
    pub scoring: Scoring,
    /// Maximum offset `d` between row and column in [`AlignMode::Banded`].
    ///
    /// **If**:
    /// * Sequence lengths differ by `d` or more:
    ///     * No alignment is possible and the cost is infinite.
    /// * Larger:
    ///     * Slower, wider band (`2d + 1` cells per row).
    ///
    /// Ignored in [`AlignMode::Unrestricted`].
    pub band_tolerance: usize,
    /// Both sequences are clipped to this many characters before aligning.
    pub max_length: usize,
    /// Both display strings are clipped to this many characters.
    pub display_length: usize,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            mode: AlignMode::default(),
            task: AlignTask::default(),
            scoring: Scoring::default(),
            band_tolerance: DEFAULT_BAND_TOLERANCE,
            max_length: usize::MAX,
            display_length: DEFAULT_DISPLAY_LENGTH,
        }
    }
}

impl AlignConfig {
    /// Cells stored per row in banded mode, `k = 2d + 1`.
    pub fn band_width(&self) -> usize {
        2 * self.band_tolerance + 1
    }

    /// Check the configuration before aligning.
    ///
    /// ### Example
    /// ```
    /// use rs_genalign::{config::AlignConfig, error::ConfigError, mode::AlignMode};
    ///
    /// let config = AlignConfig {
    ///     mode: AlignMode::Banded,
    ///     band_tolerance: 0,
    ///     ..Default::default()
    /// };
    /// assert_eq!(config.validate(), Err(ConfigError::ZeroBandTolerance));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Scoring {
            match_bonus,
            substitution,
            indel,
        } = self.scoring;

        if self.mode == AlignMode::Banded && self.band_tolerance == 0 {
            return Err(ConfigError::ZeroBandTolerance);
        }
        if self.display_length == 0 {
            return Err(ConfigError::ZeroDisplayLength);
        }
        if indel <= 0 {
            return Err(ConfigError::NonPositiveIndel(indel));
        }
        if substitution <= 0 {
            return Err(ConfigError::NonPositiveSubstitution(substitution));
        }
        if match_bonus >= substitution {
            return Err(ConfigError::MatchNotCheaper {
                match_bonus,
                substitution,
            });
        }
        Ok(())
    }
}
