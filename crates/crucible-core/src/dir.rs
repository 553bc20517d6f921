//! Compass headings for four-directional grid movement.

use std::fmt;

use crate::geom::Point;

/// One of the four cardinal headings.
///
/// North is towards decreasing `y`, matching the screen-style coordinates
/// of [`Point`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings, clockwise from north.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The heading pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// The two headings at a right angle to `self`.
    #[inline]
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Self::North | Self::South => [Self::East, Self::West],
            Self::East | Self::West => [Self::North, Self::South],
        }
    }

    /// Whether heading `other` after `self` is a right-angle turn.
    /// Neither continuing nor reversing counts.
    #[inline]
    pub fn is_turn(self, other: Direction) -> bool {
        self != other && self.opposite() != other
    }

    /// Unit step for this heading.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::North => Point::new(0, -1),
            Self::East => Point::new(1, 0),
            Self::South => Point::new(0, 1),
            Self::West => Point::new(-1, 0),
        }
    }

    /// Arrow glyph used when drawing paths.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::North => '^',
            Self::East => '>',
            Self::South => 'v',
            Self::West => '<',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl Point {
    /// The point `n` cells away in heading `dir`.
    #[inline]
    pub fn step(self, dir: Direction, n: i32) -> Point {
        self + dir.delta() * n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_pairs() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }

    #[test]
    fn perpendicular_excludes_straight_and_reverse() {
        for d in Direction::ALL {
            assert!(!d.is_turn(d));
            assert!(!d.is_turn(d.opposite()));
            for p in d.perpendicular() {
                assert!(d.is_turn(p));
            }
        }
        assert_eq!(
            Direction::North.perpendicular(),
            [Direction::East, Direction::West]
        );
    }

    #[test]
    fn step_moves_by_delta() {
        let p = Point::new(2, 2);
        assert_eq!(p.step(Direction::North, 1), Point::new(2, 1));
        assert_eq!(p.step(Direction::East, 3), Point::new(5, 2));
        assert_eq!(p.step(Direction::South, 2), Point::new(2, 4));
        assert_eq!(p.step(Direction::West, 4), Point::new(-2, 2));
    }

    #[test]
    fn glyphs() {
        let s: String = Direction::ALL.iter().map(|d| d.glyph()).collect();
        assert_eq!(s, "^>v<");
    }
}
