use crucible_core::Point;

use crate::Cost;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// A* estimate of the remaining cost from `from` to `goal`.
///
/// Every remaining step enters at least one cell costing no less than
/// `floor`, so `manhattan * floor` never overestimates and stays consistent
/// for non-negative costs.
#[inline]
pub fn estimate(from: Point, goal: Point, floor: u32) -> Cost {
    manhattan(from, goal) as Cost * Cost::from(floor)
}
