use std::fmt;

use crucible_core::{Direction, Point};

/// A search node: where the path is, which way it is heading and how many
/// cells it has moved in that heading so far.
///
/// Two states at the same position are distinct if they differ in heading
/// or run, because they admit different continuations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub pos: Point,
    pub heading: Direction,
    /// Consecutive cells entered in `heading`, including `pos`. Always >= 1.
    pub run: u32,
}

impl State {
    /// Create a new state.
    #[inline]
    pub const fn new(pos: Point, heading: Direction, run: u32) -> Self {
        Self { pos, heading, run }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.pos, self.heading, self.run)
    }
}

/// A legal transition produced by the transition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub to: State,
    /// Cost of entering `to.pos`.
    pub cost: u32,
}
