//! Loading a [`CostGrid`] from a matrix of decimal digits.
//!
//! Each line of the input is one row and each character one cell, so
//!
//! ```text
//! 241
//! 321
//! ```
//!
//! is a 3x2 grid whose top-left cell costs 2.

use std::fmt;

use crate::geom::Point;
use crate::grid::{CostGrid, GridError};

/// Errors that can occur when parsing a digit matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input had no non-blank content.
    Empty,
    /// A line is not as wide as the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a decimal digit.
    InvalidDigit { ch: char, pos: Point },
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "digit grid: empty input"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "digit grid: line {} has {found} cells, expected {expected}",
                line + 1
            ),
            Self::InvalidDigit { ch, pos } => {
                write!(f, "digit grid: invalid digit \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseGridError {}

impl From<GridError> for ParseGridError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::Empty => Self::Empty,
            GridError::Ragged {
                row,
                expected,
                found,
            } => Self::InconsistentWidth {
                line: row,
                expected,
                found,
            },
        }
    }
}

impl CostGrid {
    /// Parse a grid from lines of decimal digits.
    ///
    /// Leading/trailing whitespace is trimmed from the whole input but not
    /// from individual lines. Both `\n` and `\r\n` line endings work.
    pub fn from_digits(s: &str) -> Result<Self, ParseGridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseGridError::Empty);
        }
        let mut rows: Vec<Vec<u32>> = Vec::new();
        for (y, line) in s.lines().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, ch)| {
                    ch.to_digit(10).ok_or(ParseGridError::InvalidDigit {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    })
                })
                .collect::<Result<Vec<u32>, _>>()?;
            rows.push(row);
        }
        Ok(Self::from_rows(&rows)?)
    }
}
