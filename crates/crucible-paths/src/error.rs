//! Typed search failures.

use std::fmt;

use crucible_core::Point;

/// Why a constrained search produced no cost.
///
/// Everything except [`Exhausted`](Self::Exhausted) is a caller error that
/// is rejected before any state is explored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Every reachable state was explored without satisfying the goal test:
    /// no path respects the run limits.
    Exhausted,
    /// `min_run` was zero or greater than `max_run`.
    InvalidRunLimits { min_run: u32, max_run: u32 },
    /// The start point lies outside the map.
    StartOutOfBounds(Point),
    /// The goal point lies outside the map.
    GoalOutOfBounds(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "no path satisfies the run limits"),
            Self::InvalidRunLimits { min_run, max_run } => write!(
                f,
                "invalid run limits {min_run}..={max_run}: need 1 <= min <= max"
            ),
            Self::StartOutOfBounds(p) => write!(f, "start {p} is outside the grid"),
            Self::GoalOutOfBounds(p) => write!(f, "goal {p} is outside the grid"),
        }
    }
}

impl std::error::Error for SearchError {}
