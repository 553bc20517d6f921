use crucible_core::{CostGrid, Point, Range};

/// Read-only cost lookups the search needs from a grid.
///
/// Implementations must be pure: the same point always yields the same
/// cost for the lifetime of a search.
pub trait CostMap {
    /// Rectangle of addressable cells.
    fn bounds(&self) -> Range;

    /// Cost of entering `p`, or `None` outside [`bounds`](Self::bounds).
    fn cost(&self, p: Point) -> Option<u32>;

    /// Whether `p` lies on the map.
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// A lower bound on the cost of any cell, used to scale the heuristic.
    ///
    /// The default of 0 is always admissible and makes A* behave like plain
    /// Dijkstra.
    #[inline]
    fn min_cost(&self) -> u32 {
        0
    }
}

impl CostMap for CostGrid {
    #[inline]
    fn bounds(&self) -> Range {
        CostGrid::bounds(self)
    }

    #[inline]
    fn cost(&self, p: Point) -> Option<u32> {
        CostGrid::cost(self, p)
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        CostGrid::in_bounds(self, p)
    }

    #[inline]
    fn min_cost(&self) -> u32 {
        CostGrid::min_cost(self)
    }
}

impl<M: CostMap + ?Sized> CostMap for &M {
    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn cost(&self, p: Point) -> Option<u32> {
        (**self).cost(p)
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        (**self).in_bounds(p)
    }

    #[inline]
    fn min_cost(&self) -> u32 {
        (**self).min_cost()
    }
}
