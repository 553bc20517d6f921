//! The run-constrained A* driver.
//!
//! Search nodes are [`State`]s rather than cells, so the same cell is
//! explored once per `(heading, run)` combination that reaches it. The
//! frontier keeps superseded entries (lazy deletion); every popped entry is
//! checked against the [`CostLedger`] and dropped if its cost is no longer
//! the best one known. Skipping that check lets dominated entries be
//! expanded and floods the frontier with their successors.

use crucible_core::Point;

use crate::Cost;
use crate::config::{RunLimits, SearchConfig};
use crate::distance;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::ledger::CostLedger;
use crate::observer::{NoopObserver, SearchObserver};
use crate::path::{Path, PathTree};
use crate::state::{Move, State};
use crate::transition::Transition;
use crate::traits::CostMap;

/// Where the driver is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Frontier entries remain to be processed.
    Running,
    /// The goal was dequeued at this optimal cost.
    Found(Cost),
    /// The frontier emptied without passing the goal test.
    Exhausted,
}

/// Counters describing how much work a query did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries expanded (dequeued and not stale).
    pub expanded: usize,
    /// Superseded entries discarded at dequeue time.
    pub stale: usize,
    /// Successful relaxations, each of which queued an entry.
    pub relaxed: usize,
    /// Largest frontier size reached.
    pub frontier_high_water: usize,
    /// Distinct states recorded in the ledger.
    pub states_reached: usize,
}

/// Result of a successful query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub cost: Cost,
    /// Present when [`SearchConfig::track_path`] is set.
    pub path: Option<Path>,
    pub stats: SearchStats,
}

/// Reusable run-constrained A* search.
///
/// `CrucibleSearch` owns the ledger, frontier and scratch buffers of one
/// query at a time and keeps their allocations between queries. Use
/// [`run`](Self::run) for the corner-to-corner query, or
/// [`begin`](Self::begin) plus [`step`](Self::step) to drive a search one
/// dequeue at a time.
#[derive(Debug)]
pub struct CrucibleSearch {
    config: SearchConfig,
    transition: Transition,
    ledger: CostLedger,
    frontier: Frontier,
    tree: PathTree,
    start: Point,
    goal: Point,
    floor: u32,
    status: SearchStatus,
    goal_state: Option<State>,
    stats: SearchStats,
    mbuf: Vec<Move>,
}

impl CrucibleSearch {
    /// Create a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            transition: Transition::new(config.limits, config.lookahead),
            ledger: CostLedger::new(),
            frontier: Frontier::new(),
            tree: PathTree::default(),
            start: Point::ZERO,
            goal: Point::ZERO,
            floor: 0,
            status: SearchStatus::Exhausted,
            goal_state: None,
            stats: SearchStats::default(),
            mbuf: Vec::with_capacity(4),
        }
    }

    /// The configuration queries run with.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Current driver status.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Counters for the current or last query.
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            frontier_high_water: self.frontier.high_water(),
            states_reached: self.ledger.len(),
            ..self.stats
        }
    }

    /// Best known costs of the current or last query.
    pub fn ledger(&self) -> &CostLedger {
        &self.ledger
    }

    /// Find the cheapest path from the top-left to the bottom-right corner
    /// of `map`.
    pub fn run<M, O>(&mut self, map: &M, observer: &mut O) -> Result<Solution, SearchError>
    where
        M: CostMap,
        O: SearchObserver + ?Sized,
    {
        let rng = map.bounds();
        let goal = rng.last().ok_or(SearchError::StartOutOfBounds(rng.min))?;
        self.run_between(map, rng.min, goal, observer)
    }

    /// Find the cheapest path from `start` to `goal`.
    pub fn run_between<M, O>(
        &mut self,
        map: &M,
        start: Point,
        goal: Point,
        observer: &mut O,
    ) -> Result<Solution, SearchError>
    where
        M: CostMap,
        O: SearchObserver + ?Sized,
    {
        self.begin(map, start, goal, observer)?;
        while self.step(map, observer) == SearchStatus::Running {}
        self.solution()
    }

    /// Reset all per-query state and seed the frontier with the first moves
    /// out of `start`.
    ///
    /// Afterwards the status is `Running`, or `Found(0)` when `start` and
    /// `goal` coincide.
    pub fn begin<M, O>(
        &mut self,
        map: &M,
        start: Point,
        goal: Point,
        observer: &mut O,
    ) -> Result<(), SearchError>
    where
        M: CostMap,
        O: SearchObserver + ?Sized,
    {
        let limits = self.config.limits;
        RunLimits::new(limits.min_run(), limits.max_run())?;
        if !map.in_bounds(start) {
            return Err(SearchError::StartOutOfBounds(start));
        }
        if !map.in_bounds(goal) {
            return Err(SearchError::GoalOutOfBounds(goal));
        }

        self.ledger.clear();
        self.frontier.clear();
        self.tree.clear();
        self.stats = SearchStats::default();
        self.goal_state = None;
        self.start = start;
        self.goal = goal;
        self.floor = map.min_cost();

        if start == goal {
            self.status = SearchStatus::Found(0);
            return Ok(());
        }
        self.status = SearchStatus::Running;

        let mut mbuf = std::mem::take(&mut self.mbuf);
        mbuf.clear();
        self.transition.first_moves(map, start, &mut mbuf);
        for m in mbuf.iter() {
            self.enqueue(None, m.to, Cost::from(m.cost), observer);
        }
        self.mbuf = mbuf;
        Ok(())
    }

    /// Process one frontier entry and return the resulting status.
    ///
    /// Does nothing once the search has finished.
    pub fn step<M, O>(&mut self, map: &M, observer: &mut O) -> SearchStatus
    where
        M: CostMap,
        O: SearchObserver + ?Sized,
    {
        if self.status != SearchStatus::Running {
            return self.status;
        }

        let Some(entry) = self.frontier.pop() else {
            observer.exhausted();
            self.status = SearchStatus::Exhausted;
            return self.status;
        };

        let state = entry.state;
        let cost = entry.cost;
        if self.ledger.get(&state) != Some(cost) {
            self.stats.stale += 1;
            observer.stale(&state, cost);
            return self.status;
        }

        self.stats.expanded += 1;
        observer.dequeued(&state, cost, entry.priority);

        if state.pos == self.goal && state.run >= self.config.limits.min_run() {
            observer.goal_found(&state, cost);
            self.goal_state = Some(state);
            self.status = SearchStatus::Found(cost);
            return self.status;
        }

        let mut mbuf = std::mem::take(&mut self.mbuf);
        mbuf.clear();
        self.transition.successors(map, &state, &mut mbuf);
        for m in mbuf.iter() {
            self.enqueue(Some(state), m.to, cost + Cost::from(m.cost), observer);
        }
        self.mbuf = mbuf;
        self.status
    }

    /// Relax `to` at `cost` and queue it if that improved the ledger.
    fn enqueue<O: SearchObserver + ?Sized>(
        &mut self,
        from: Option<State>,
        to: State,
        cost: Cost,
        observer: &mut O,
    ) {
        if !self.ledger.relax(to, cost) {
            return;
        }
        let priority = cost + distance::estimate(to.pos, self.goal, self.floor);
        self.frontier.push(to, cost, priority);
        self.stats.relaxed += 1;
        if self.config.track_path {
            if let Some(from) = from {
                self.tree.link(from, to);
            }
        }
        observer.relaxed(&to, cost, priority);
    }

    /// The outcome of a finished query.
    fn solution(&self) -> Result<Solution, SearchError> {
        match self.status {
            SearchStatus::Found(cost) => {
                let path = self.config.track_path.then(|| {
                    let states = self
                        .goal_state
                        .map(|g| self.tree.path_to(g))
                        .unwrap_or_default();
                    Path::new(self.start, states, cost)
                });
                Ok(Solution {
                    cost,
                    path,
                    stats: self.stats(),
                })
            }
            SearchStatus::Exhausted | SearchStatus::Running => Err(SearchError::Exhausted),
        }
    }
}

/// Minimum cost from the top-left to the bottom-right corner of `map`
/// when every straight run must be between `min_run` and `max_run` cells.
///
/// ```
/// use crucible_core::CostGrid;
/// use crucible_paths::shortest_constrained_path;
///
/// let grid = CostGrid::filled(3, 3, 1).unwrap();
/// assert_eq!(shortest_constrained_path(&grid, 1, 3), Ok(4));
/// assert!(shortest_constrained_path(&grid, 4, 10).is_err());
/// ```
pub fn shortest_constrained_path<M: CostMap>(
    map: &M,
    min_run: u32,
    max_run: u32,
) -> Result<Cost, SearchError> {
    let limits = RunLimits::new(min_run, max_run)?;
    CrucibleSearch::new(SearchConfig::new(limits))
        .run(map, &mut NoopObserver)
        .map(|s| s.cost)
}

/// Run one corner-to-corner query per configuration, each on its own
/// thread, sharing `map`. Results are returned in the order of `configs`.
pub fn search_all<M: CostMap + Sync>(
    map: &M,
    configs: &[SearchConfig],
) -> Vec<Result<Solution, SearchError>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = configs
            .iter()
            .map(|&config| {
                scope.spawn(move || CrucibleSearch::new(config).run(map, &mut NoopObserver))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crucible_core::CostGrid;

    #[test]
    fn solution_round_trip() {
        let g = CostGrid::filled(4, 3, 2).unwrap();
        let sol = CrucibleSearch::new(SearchConfig::default().with_path(true))
            .run(&g, &mut NoopObserver)
            .unwrap();
        let json = serde_json::to_string(&sol).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sol);
    }

    #[test]
    fn deserialized_grid_searches_like_the_original() {
        let g = CostGrid::from_fn(6, 6, |p| ((p.x * 7 + p.y * 3) % 9 + 1) as u32).unwrap();
        let mut v = serde_json::to_value(&g).unwrap();
        let back: CostGrid = serde_json::from_value(v.clone()).unwrap();
        for (min, max) in [(1, 3), (4, 10)] {
            assert_eq!(
                shortest_constrained_path(&back, min, max),
                shortest_constrained_path(&g, min, max)
            );
        }

        // An inflated minimum would make the estimate overshoot.
        v["min_cost"] = serde_json::json!(9);
        assert!(serde_json::from_value::<CostGrid>(v).is_err());
    }
}
