//! Hooks for watching a search as it runs.

use crate::Cost;
use crate::state::State;

/// Receives notifications at fixed points of the search loop.
///
/// All methods default to doing nothing, so an observer only implements
/// the events it cares about.
pub trait SearchObserver {
    /// A live entry was taken off the frontier and is about to be expanded.
    fn dequeued(&mut self, _state: &State, _cost: Cost, _priority: Cost) {}

    /// A superseded frontier entry was discarded unexpanded.
    fn stale(&mut self, _state: &State, _cost: Cost) {}

    /// A successor improved its best known cost and was queued.
    fn relaxed(&mut self, _state: &State, _cost: Cost, _priority: Cost) {}

    /// The goal test passed.
    fn goal_found(&mut self, _state: &State, _cost: Cost) {}

    /// The frontier ran dry without reaching the goal.
    fn exhausted(&mut self) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that forwards events to the [`log`] facade.
///
/// Per-state events are logged at `trace`, terminal events at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn dequeued(&mut self, state: &State, cost: Cost, priority: Cost) {
        log::trace!("{state}: C={cost} P={priority}");
    }

    fn stale(&mut self, state: &State, cost: Cost) {
        log::trace!("{state}: stale C={cost}");
    }

    fn relaxed(&mut self, state: &State, cost: Cost, priority: Cost) {
        log::trace!("\t{state}: C={cost} P={priority}");
    }

    fn goal_found(&mut self, state: &State, cost: Cost) {
        log::debug!("goal reached at {state} with cost {cost}");
    }

    fn exhausted(&mut self) {
        log::debug!("frontier exhausted without reaching the goal");
    }
}
