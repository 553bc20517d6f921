//! Legal moves out of a search state.

use crucible_core::{Direction, Point};

use crate::config::RunLimits;
use crate::state::{Move, State};
use crate::traits::CostMap;

/// Enumerates successor states under a set of run limits.
///
/// From any state the candidates are: continue straight, or turn to one of
/// the two perpendicular headings. Reversing is never legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    limits: RunLimits,
    lookahead: bool,
}

impl Transition {
    /// Create a transition rule. See [`SearchConfig::lookahead`](crate::SearchConfig::lookahead).
    pub fn new(limits: RunLimits, lookahead: bool) -> Self {
        Self { limits, lookahead }
    }

    /// The limits this rule enforces.
    pub fn limits(&self) -> RunLimits {
        self.limits
    }

    /// Append the moves that seed a search from `start` into `buf`.
    ///
    /// The start has no heading, so every in-bounds cardinal step is a
    /// first move with run 1. From the top-left corner that is one step
    /// east and one step south. The caller clears `buf` before calling.
    pub fn first_moves<M: CostMap>(&self, map: &M, start: Point, buf: &mut Vec<Move>) {
        for dir in Direction::ALL {
            let next = start.step(dir, 1);
            if let Some(cost) = map.cost(next) {
                buf.push(Move {
                    to: State::new(next, dir, 1),
                    cost,
                });
            }
        }
    }

    /// Append the legal successors of `state` into `buf`, straight ahead
    /// first. The caller clears `buf` before calling.
    pub fn successors<M: CostMap>(&self, map: &M, state: &State, buf: &mut Vec<Move>) {
        if state.run < self.limits.max_run() {
            self.push_move(map, state.pos, state.heading, state.run + 1, buf);
        }
        if state.run < self.limits.min_run() {
            return;
        }
        for dir in state.heading.perpendicular() {
            if self.lookahead
                && self.limits.min_run() > 1
                && !reaches(map, state.pos, dir, self.limits.min_run())
            {
                continue;
            }
            self.push_move(map, state.pos, dir, 1, buf);
        }
    }

    #[inline]
    fn push_move<M: CostMap>(
        &self,
        map: &M,
        from: Point,
        dir: Direction,
        run: u32,
        buf: &mut Vec<Move>,
    ) {
        let next = from.step(dir, 1);
        if let Some(cost) = map.cost(next) {
            buf.push(Move {
                to: State::new(next, dir, run),
                cost,
            });
        }
    }
}

/// Whether the cell `n` steps from `from` in `dir` is on the map.
fn reaches<M: CostMap>(map: &M, from: Point, dir: Direction, n: u32) -> bool {
    let d = dir.delta();
    let x = i64::from(from.x) + i64::from(d.x) * i64::from(n);
    let y = i64::from(from.y) + i64::from(d.y) * i64::from(n);
    match (i32::try_from(x), i32::try_from(y)) {
        (Ok(x), Ok(y)) => map.in_bounds(Point::new(x, y)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::CostGrid;

    fn grid() -> CostGrid {
        CostGrid::from_fn(6, 6, |p| (p.x + 1) as u32).unwrap()
    }

    fn succ(t: &Transition, g: &CostGrid, s: State) -> Vec<Move> {
        let mut buf = Vec::new();
        t.successors(g, &s, &mut buf);
        buf
    }

    #[test]
    fn first_moves_from_corner() {
        let g = grid();
        let t = Transition::new(RunLimits::CRUCIBLE, true);
        let mut buf = Vec::new();
        t.first_moves(&g, Point::new(0, 0), &mut buf);
        assert_eq!(
            buf,
            vec![
                Move {
                    to: State::new(Point::new(1, 0), Direction::East, 1),
                    cost: 2
                },
                Move {
                    to: State::new(Point::new(0, 1), Direction::South, 1),
                    cost: 1
                },
            ]
        );
    }

    #[test]
    fn first_moves_from_interior() {
        let g = grid();
        let t = Transition::new(RunLimits::CRUCIBLE, true);
        let mut buf = Vec::new();
        t.first_moves(&g, Point::new(2, 2), &mut buf);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn straight_and_turns() {
        let g = grid();
        let t = Transition::new(RunLimits::CRUCIBLE, true);
        let moves = succ(&t, &g, State::new(Point::new(2, 2), Direction::East, 1));
        let states: Vec<State> = moves.iter().map(|m| m.to).collect();
        assert_eq!(
            states,
            vec![
                State::new(Point::new(3, 2), Direction::East, 2),
                State::new(Point::new(2, 1), Direction::North, 1),
                State::new(Point::new(2, 3), Direction::South, 1),
            ]
        );
        assert_eq!(moves[0].cost, 4);
    }

    #[test]
    fn never_reverses() {
        let g = grid();
        let t = Transition::new(RunLimits::CRUCIBLE, true);
        for d in Direction::ALL {
            for m in succ(&t, &g, State::new(Point::new(3, 3), d, 1)) {
                assert_ne!(m.to.heading, d.opposite());
            }
        }
    }

    #[test]
    fn max_run_forces_turn() {
        let g = grid();
        let t = Transition::new(RunLimits::CRUCIBLE, true);
        let moves = succ(&t, &g, State::new(Point::new(3, 2), Direction::East, 3));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.to.heading != Direction::East && m.to.run == 1));
    }

    #[test]
    fn min_run_blocks_turn() {
        let g = grid();
        let t = Transition::new(RunLimits::ULTRA, true);
        let moves = succ(&t, &g, State::new(Point::new(1, 3), Direction::East, 3));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, State::new(Point::new(2, 3), Direction::East, 4));
    }

    #[test]
    fn out_of_bounds_discarded() {
        let g = grid();
        let t = Transition::new(RunLimits::CRUCIBLE, true);
        let moves = succ(&t, &g, State::new(Point::new(5, 0), Direction::East, 1));
        let states: Vec<State> = moves.iter().map(|m| m.to).collect();
        assert_eq!(states, vec![State::new(Point::new(5, 1), Direction::South, 1)]);
    }

    #[test]
    fn lookahead_prunes_short_corridors() {
        let g = grid();
        // At (4, 2) heading south with run 4: turning east has only one cell
        // left before the wall, turning west has four.
        let s = State::new(Point::new(4, 2), Direction::South, 4);

        let with = Transition::new(RunLimits::ULTRA, true);
        let headings: Vec<Direction> = succ(&with, &g, s).iter().map(|m| m.to.heading).collect();
        assert_eq!(headings, vec![Direction::South, Direction::West]);

        let without = Transition::new(RunLimits::ULTRA, false);
        let headings: Vec<Direction> = succ(&without, &g, s).iter().map(|m| m.to.heading).collect();
        assert_eq!(headings, vec![Direction::South, Direction::East, Direction::West]);
    }

    #[test]
    fn reaches_handles_huge_steps() {
        let g = grid();
        assert!(reaches(&g, Point::new(0, 0), Direction::East, 5));
        assert!(!reaches(&g, Point::new(0, 0), Direction::East, 6));
        assert!(!reaches(&g, Point::new(0, 0), Direction::East, u32::MAX));
        assert!(!reaches(&g, Point::new(0, 0), Direction::West, 1));
    }
}
