//! An immutable grid of per-cell traversal costs.
//!
//! [`CostGrid`] owns a flat row-major buffer of `u32` costs. It is never
//! mutated after construction, so a single grid can be shared by reference
//! between any number of concurrent searches.

use std::fmt;

use crate::geom::{Point, Range};

/// Errors that can occur when building a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid would have no cells.
    Empty,
    /// A row does not have the same width as the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular 2D grid of non-negative movement costs.
///
/// The cost of a cell is paid when a path *enters* it. The origin is the
/// top-left corner `(0, 0)`.
///
/// With the `serde` feature a grid is stored as its rows alone and rebuilt
/// through [`from_rows`](Self::from_rows) when read back, so a deserialized
/// grid is validated and its minimum cost recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRows", into = "GridRows")
)]
pub struct CostGrid {
    cells: Vec<u32>,
    bounds: Range,
    min_cost: u32,
}

impl CostGrid {
    /// Create a grid where every cell costs `cost`.
    pub fn filled(width: i32, height: i32, cost: u32) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_| cost)
    }

    /// Create a grid from a function of each point, in row-major order.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(Point) -> u32,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let bounds = Range::from_size(width, height);
        let cells: Vec<u32> = bounds.iter().map(&mut f).collect();
        Ok(Self::with_cells(cells, bounds))
    }

    /// Create a grid from rows of costs. All rows must have the same,
    /// non-zero width.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        let bounds = Range::from_size(width as i32, rows.len() as i32);
        Ok(Self::with_cells(cells, bounds))
    }

    fn with_cells(cells: Vec<u32>, bounds: Range) -> Self {
        let min_cost = cells.iter().copied().min().unwrap_or(0);
        Self {
            cells,
            bounds,
            min_cost,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.bounds.width() + p.x) as usize
    }

    /// Returns the bounding range of the grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the grid.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Cost of entering `p`, or `None` if out of bounds.
    #[inline]
    pub fn cost(&self, p: Point) -> Option<u32> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Smallest cost of any cell.
    pub fn min_cost(&self) -> u32 {
        self.min_cost
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point {
        self.bounds.min
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        self.bounds.max.shift(-1, -1)
    }

    /// Iterate over `(Point, cost)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.bounds.width() as usize)
    }
}

/// Serialized form of a [`CostGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct GridRows {
    rows: Vec<Vec<u32>>,
}

#[cfg(feature = "serde")]
impl From<CostGrid> for GridRows {
    fn from(grid: CostGrid) -> Self {
        Self {
            rows: grid.rows().map(<[u32]>::to_vec).collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRows> for CostGrid {
    type Error = GridError;

    fn try_from(raw: GridRows) -> Result<Self, GridError> {
        CostGrid::from_rows(&raw.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_and_size() {
        let g = CostGrid::filled(10, 5, 1).unwrap();
        assert_eq!(g.bounds().len(), 50);
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.top_left(), Point::new(0, 0));
        assert_eq!(g.bottom_right(), Point::new(9, 4));
        assert_eq!(g.min_cost(), 1);
    }

    #[test]
    fn test_cost_and_bounds() {
        let g = CostGrid::from_rows(&[[1u32, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(g.cost(Point::new(0, 0)), Some(1));
        assert_eq!(g.cost(Point::new(2, 1)), Some(6));
        assert_eq!(g.cost(Point::new(3, 0)), None);
        assert_eq!(g.cost(Point::new(0, -1)), None);
        assert!(g.in_bounds(Point::new(1, 1)));
        assert!(!g.in_bounds(Point::new(1, 2)));
    }

    #[test]
    fn test_from_fn_row_major() {
        let g = CostGrid::from_fn(3, 2, |p| (p.y * 3 + p.x) as u32).unwrap();
        let costs: Vec<u32> = g.iter().map(|(_, c)| c).collect();
        assert_eq!(costs, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(g.min_cost(), 0);
        let rows: Vec<&[u32]> = g.rows().collect();
        assert_eq!(rows, vec![&[0, 1, 2][..], &[3, 4, 5][..]]);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(CostGrid::filled(0, 3, 1), Err(GridError::Empty));
        assert_eq!(CostGrid::filled(3, 0, 1), Err(GridError::Empty));
        let rows: [[u32; 0]; 1] = [[]];
        assert_eq!(CostGrid::from_rows(&rows), Err(GridError::Empty));
        let none: &[Vec<u32>] = &[];
        assert_eq!(CostGrid::from_rows(none), Err(GridError::Empty));
    }

    #[test]
    fn test_ragged_rejected() {
        let rows = vec![vec![1u32, 1, 1], vec![1, 1]];
        assert_eq!(
            CostGrid::from_rows(&rows),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let g = CostGrid::filled(4, 4, 2).unwrap();
        let total: u32 = std::thread::scope(|s| {
            let a = s.spawn(|| g.iter().map(|(_, c)| c).sum::<u32>());
            let b = s.spawn(|| g.iter().map(|(_, c)| c).sum::<u32>());
            a.join().unwrap() + b.join().unwrap()
        });
        assert_eq!(total, 64);
    }
}
