//! Unconstrained single-pair Dijkstra, the baseline the run limits can only
//! make worse.

use std::collections::BinaryHeap;

use crucible_core::{Point, Range};

use crate::Cost;
use crate::traits::CostMap;

/// Reference into the flat cost array, ordered by `g` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    g: Cost,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest g first.
        other.g.cmp(&self.g).then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[inline]
fn idx(rng: Range, p: Point) -> usize {
    ((p.y - rng.min.y) * rng.width() + (p.x - rng.min.x)) as usize
}

/// Cheapest cost from `from` to `to` moving freely between 4-neighbours,
/// paying the cost of each cell entered.
///
/// Returns `None` if either point is off the map. On a connected grid every
/// in-bounds pair is reachable.
pub fn unconstrained_cost<M: CostMap>(map: &M, from: Point, to: Point) -> Option<Cost> {
    let rng = map.bounds();
    if !rng.contains(from) || !rng.contains(to) {
        return None;
    }
    let mut dist = vec![Cost::MAX; rng.len()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let si = idx(rng, from);
    dist[si] = 0;
    open.push(NodeRef { idx: si, g: 0 });

    let goal = idx(rng, to);
    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if current.g != dist[ci] {
            continue;
        }
        if ci == goal {
            return Some(current.g);
        }
        let cp = Point::new(
            (ci % rng.width() as usize) as i32 + rng.min.x,
            (ci / rng.width() as usize) as i32 + rng.min.y,
        );
        for np in cp.neighbors_4() {
            let Some(c) = map.cost(np) else {
                continue;
            };
            let ni = idx(rng, np);
            let tentative = current.g + Cost::from(c);
            if tentative >= dist[ni] {
                continue;
            }
            dist[ni] = tentative;
            open.push(NodeRef {
                idx: ni,
                g: tentative,
            });
        }
    }
    None
}
