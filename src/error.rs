//! Errors raised before any table is built.

use thiserror::Error;

/// Invalid [`AlignConfig`](crate::config::AlignConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Banded mode needs room for at least one off-diagonal step.
    #[error("Band tolerance must be at least 1 in banded mode")]
    ZeroBandTolerance,

    /// Display strings would always be empty.
    #[error("Display length must be at least 1")]
    ZeroDisplayLength,

    /// Indels must cost something.
    #[error("Indel cost must be positive, got {0}")]
    NonPositiveIndel(i64),

    /// Substitutions must cost something.
    #[error("Substitution cost must be positive, got {0}")]
    NonPositiveSubstitution(i64),

    /// A match must be cheaper than a substitution.
    #[error("Match bonus {match_bonus} must be lower than substitution cost {substitution}")]
    MatchNotCheaper {
        /// Configured match bonus.
        match_bonus: i64,
        /// Configured substitution cost.
        substitution: i64,
    },
}
