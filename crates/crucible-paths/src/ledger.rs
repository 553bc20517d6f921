//! Best-known cost per search state.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::Cost;
use crate::state::State;

/// Mapping from [`State`] to the cheapest cost found so far for reaching it.
///
/// Values only ever decrease, and only on a strictly cheaper candidate.
/// Entries are never removed during a query; [`clear`](Self::clear) resets
/// the ledger between queries while keeping its allocation.
#[derive(Debug, Default, Clone)]
pub struct CostLedger {
    best: HashMap<State, Cost>,
}

impl CostLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Best known cost for `state`, if it has been reached.
    #[inline]
    pub fn get(&self, state: &State) -> Option<Cost> {
        self.best.get(state).copied()
    }

    /// Record `candidate` for `state` if it is strictly cheaper than the
    /// current entry. Returns whether the ledger changed.
    ///
    /// An equal-cost candidate is rejected: re-queueing it would only
    /// duplicate work already in the frontier.
    pub fn relax(&mut self, state: State, candidate: Cost) -> bool {
        match self.best.entry(state) {
            Entry::Occupied(e) if candidate >= *e.get() => false,
            Entry::Occupied(mut e) => {
                e.insert(candidate);
                true
            }
            Entry::Vacant(e) => {
                e.insert(candidate);
                true
            }
        }
    }

    /// Number of states reached.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether no state has been reached.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.best.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::{Direction, Point};

    fn s(x: i32, run: u32) -> State {
        State::new(Point::new(x, 0), Direction::East, run)
    }

    #[test]
    fn first_relax_inserts() {
        let mut l = CostLedger::new();
        assert!(l.is_empty());
        assert!(l.relax(s(1, 1), 7));
        assert_eq!(l.get(&s(1, 1)), Some(7));
        assert_eq!(l.get(&s(1, 2)), None);
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn only_strictly_cheaper_wins() {
        let mut l = CostLedger::new();
        assert!(l.relax(s(1, 1), 7));
        assert!(!l.relax(s(1, 1), 7), "equal cost must be rejected");
        assert!(!l.relax(s(1, 1), 9));
        assert_eq!(l.get(&s(1, 1)), Some(7));
        assert!(l.relax(s(1, 1), 3));
        assert_eq!(l.get(&s(1, 1)), Some(3));
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn zero_cost_accepted_once() {
        let mut l = CostLedger::new();
        assert!(l.relax(s(0, 1), 0));
        assert!(!l.relax(s(0, 1), 0));
    }

    #[test]
    fn clear_resets() {
        let mut l = CostLedger::new();
        l.relax(s(1, 1), 1);
        l.relax(s(2, 2), 2);
        assert_eq!(l.len(), 2);
        l.clear();
        assert!(l.is_empty());
        assert!(l.relax(s(1, 1), 5));
    }
}
