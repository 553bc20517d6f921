//! Min-priority frontier for A* with lazy deletion.
//!
//! Entries are stored in a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are popped first; ties are broken by insertion order
//! (FIFO), so the pop order is fully deterministic.
//!
//! Updating a state's cost does not touch entries already queued for it.
//! Callers push a fresh entry instead and discard stale ones when they are
//! popped, by comparing [`FrontierEntry::cost`] against the cost ledger.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::Cost;
use crate::state::State;

/// A queued state together with the cost it was queued at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub state: State,
    /// Cost-so-far at the time of insertion.
    pub cost: Cost,
    /// `cost` plus the heuristic estimate.
    pub priority: Cost,
}

#[derive(Debug)]
struct Slot {
    entry: FrontierEntry,
    seq: u64,
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.entry.priority == other.entry.priority && self.seq == other.seq
    }
}

impl Eq for Slot {}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap: smaller priority first,
        // then smaller seq.
        self.entry
            .priority
            .cmp(&other.entry.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Pending search states ordered by priority.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Slot>>,
    seq: u64,
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `state`, reached at `cost`, with the given priority.
    pub fn push(&mut self, state: State, cost: Cost, priority: Cost) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Slot {
            entry: FrontierEntry {
                state,
                cost,
                priority,
            },
            seq,
        }));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the entry with the lowest priority (ties broken FIFO).
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(slot)| slot.entry)
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest number of entries held at once since the last clear.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Remove every entry and reset the insertion counter.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
        self.high_water = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::{Direction, Point};

    fn s(x: i32) -> State {
        State::new(Point::new(x, 0), Direction::East, 1)
    }

    #[test]
    fn test_basic_push_pop() {
        let mut q = Frontier::new();
        q.push(s(0), 3, 3);
        q.push(s(1), 1, 1);
        q.push(s(2), 2, 2);

        assert_eq!(q.pop().map(|e| e.state), Some(s(1)));
        assert_eq!(q.pop().map(|e| e.state), Some(s(2)));
        assert_eq!(q.pop().map(|e| e.state), Some(s(0)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_fifo_same_priority() {
        let mut q = Frontier::new();
        q.push(s(5), 4, 10);
        q.push(s(3), 6, 10);
        q.push(s(9), 1, 10);

        assert_eq!(q.pop().map(|e| e.state), Some(s(5)));
        assert_eq!(q.pop().map(|e| e.state), Some(s(3)));
        assert_eq!(q.pop().map(|e| e.state), Some(s(9)));
    }

    #[test]
    fn test_entry_keeps_cost() {
        let mut q = Frontier::new();
        q.push(s(1), 7, 12);
        let e = q.pop().unwrap();
        assert_eq!(e.cost, 7);
        assert_eq!(e.priority, 12);
    }

    #[test]
    fn test_duplicates_coexist() {
        let mut q = Frontier::new();
        q.push(s(1), 9, 9);
        q.push(s(1), 4, 4);
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop().map(|e| e.cost), Some(4));
        assert_eq!(q.pop().map(|e| e.cost), Some(9));
    }

    #[test]
    fn test_high_water_and_clear() {
        let mut q = Frontier::new();
        assert!(q.is_empty());
        q.push(s(0), 0, 0);
        q.push(s(1), 0, 0);
        q.pop();
        q.push(s(2), 0, 0);
        assert_eq!(q.len(), 2);
        assert_eq!(q.high_water(), 2);
        q.push(s(3), 0, 0);
        assert_eq!(q.high_water(), 3);

        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.high_water(), 0);
    }
}
