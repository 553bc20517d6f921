//! Search configuration: run-length limits and optional behaviours.

use std::fmt;

use crate::error::SearchError;

/// Inclusive bounds on how far a path may travel straight.
///
/// A path may only turn once it has moved at least `min_run` cells in its
/// current heading, may never move more than `max_run` cells without
/// turning, and may only stop at the goal after at least `min_run` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunLimits {
    min_run: u32,
    max_run: u32,
}

impl RunLimits {
    /// At most three cells in a straight line, turn whenever.
    pub const CRUCIBLE: Self = Self {
        min_run: 1,
        max_run: 3,
    };

    /// At least four and at most ten cells before turning or stopping.
    pub const ULTRA: Self = Self {
        min_run: 4,
        max_run: 10,
    };

    /// Validate and build limits. Requires `1 <= min_run <= max_run`.
    pub fn new(min_run: u32, max_run: u32) -> Result<Self, SearchError> {
        if min_run == 0 || min_run > max_run {
            return Err(SearchError::InvalidRunLimits { min_run, max_run });
        }
        Ok(Self { min_run, max_run })
    }

    /// Limits that never force a turn: any run up to `u32::MAX`.
    pub const fn unbounded() -> Self {
        Self {
            min_run: 1,
            max_run: u32::MAX,
        }
    }

    /// Minimum straight run before turning or stopping.
    #[inline]
    pub const fn min_run(self) -> u32 {
        self.min_run
    }

    /// Maximum straight run before a turn is forced.
    #[inline]
    pub const fn max_run(self) -> u32 {
        self.max_run
    }
}

impl Default for RunLimits {
    fn default() -> Self {
        Self::CRUCIBLE
    }
}

impl fmt::Display for RunLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min_run, self.max_run)
    }
}

/// Options for one constrained search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub limits: RunLimits,
    /// Refuse turns into corridors too short to complete `min_run` cells.
    ///
    /// Only prunes dead ends; the optimal cost is the same either way.
    pub lookahead: bool,
    /// Record parent links so the optimal path can be reconstructed.
    pub track_path: bool,
}

impl SearchConfig {
    /// Default options with the given limits.
    pub fn new(limits: RunLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Set whether the turn lookahead is used.
    pub fn with_lookahead(mut self, lookahead: bool) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Set whether the optimal path is reconstructed.
    pub fn with_path(mut self, track_path: bool) -> Self {
        self.track_path = track_path;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limits: RunLimits::default(),
            lookahead: true,
            track_path: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_limits() {
        let l = RunLimits::new(4, 10).unwrap();
        assert_eq!(l, RunLimits::ULTRA);
        assert_eq!(l.min_run(), 4);
        assert_eq!(l.max_run(), 10);
        assert_eq!(l.to_string(), "4..=10");
        assert!(RunLimits::new(3, 3).is_ok());
    }

    #[test]
    fn invalid_limits() {
        assert_eq!(
            RunLimits::new(0, 3),
            Err(SearchError::InvalidRunLimits {
                min_run: 0,
                max_run: 3
            })
        );
        assert_eq!(
            RunLimits::new(5, 4),
            Err(SearchError::InvalidRunLimits {
                min_run: 5,
                max_run: 4
            })
        );
    }

    #[test]
    fn config_builders() {
        let c = SearchConfig::new(RunLimits::ULTRA)
            .with_lookahead(false)
            .with_path(true);
        assert_eq!(c.limits, RunLimits::ULTRA);
        assert!(!c.lookahead);
        assert!(c.track_path);

        let d = SearchConfig::default();
        assert_eq!(d.limits, RunLimits::CRUCIBLE);
        assert!(d.lookahead);
        assert!(!d.track_path);
    }
}
