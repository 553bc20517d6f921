//! Reconstructed optimal paths.

use std::collections::HashMap;

use crucible_core::{Direction, Point};

use crate::Cost;
use crate::config::RunLimits;
use crate::state::State;
use crate::traits::CostMap;

/// Parent links recorded during a search, child to parent.
///
/// Seed states have no parent. A link is overwritten whenever its child is
/// reached more cheaply.
#[derive(Debug, Default, Clone)]
pub(crate) struct PathTree {
    parents: HashMap<State, State>,
}

impl PathTree {
    pub(crate) fn link(&mut self, from: State, to: State) {
        self.parents.insert(to, from);
    }

    pub(crate) fn clear(&mut self) {
        self.parents.clear();
    }

    /// States from the first move to `goal`, inclusive.
    pub(crate) fn path_to(&self, goal: State) -> Vec<State> {
        let mut path = vec![goal];
        let mut cur = goal;
        while let Some(&parent) = self.parents.get(&cur) {
            if path.len() > self.parents.len() {
                break;
            }
            path.push(parent);
            cur = parent;
        }
        path.reverse();
        path
    }
}

/// An optimal path from the start to the goal.
///
/// The start cell itself is not a state; `states()[0]` is the first cell
/// entered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    start: Point,
    states: Vec<State>,
    cost: Cost,
}

impl Path {
    pub(crate) fn new(start: Point, states: Vec<State>, cost: Cost) -> Self {
        Self {
            start,
            states,
            cost,
        }
    }

    /// Cell the path leaves from.
    pub fn start(&self) -> Point {
        self.start
    }

    /// States entered along the path, in order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Total cost of the cells entered.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the path makes no move (start and goal coincide).
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Maximal straight segments as `(heading, length)`.
    pub fn runs(&self) -> Vec<(Direction, u32)> {
        let mut runs: Vec<(Direction, u32)> = Vec::new();
        for s in &self.states {
            if let Some((d, n)) = runs.last_mut() {
                if *d == s.heading {
                    *n += 1;
                    continue;
                }
            }
            runs.push((s.heading, 1));
        }
        runs
    }

    /// Whether every segment is within `limits`, including the final one,
    /// and each change of heading is a turn rather than a reversal.
    pub fn respects(&self, limits: RunLimits) -> bool {
        let runs = self.runs();
        runs.iter()
            .all(|&(_, n)| n >= limits.min_run() && n <= limits.max_run())
            && runs.windows(2).all(|w| w[0].0.is_turn(w[1].0))
    }

    /// Draw the map as digits with every entered cell replaced by the
    /// heading it was entered with. Costs above 9 are drawn as `#`.
    pub fn overlay<M: CostMap>(&self, map: &M) -> String {
        let on_path: HashMap<Point, Direction> =
            self.states.iter().map(|s| (s.pos, s.heading)).collect();
        let rng = map.bounds();
        let mut out = String::with_capacity(rng.len() + rng.height().max(0) as usize);
        for p in rng.iter() {
            if p.x == rng.min.x && p.y != rng.min.y {
                out.push('\n');
            }
            let ch = match on_path.get(&p) {
                Some(d) => d.glyph(),
                None => map
                    .cost(p)
                    .and_then(|c| char::from_digit(c, 10))
                    .unwrap_or('#'),
            };
            out.push(ch);
        }
        out
    }
}
