//! Run-constrained shortest paths on weighted grids.
//!
//! The search finds the cheapest walk between two cells of a cost grid
//! where every straight run must be between a minimum and a maximum number
//! of cells and the walker never reverses:
//!
//! - **A\*** over `(position, heading, run)` states ([`CrucibleSearch`])
//! - a one-call corner-to-corner helper ([`shortest_constrained_path`])
//! - a scoped-thread batch over several configurations ([`search_all`])
//! - an unconstrained **Dijkstra** baseline ([`unconstrained_cost`])
//!
//! [`CrucibleSearch`] owns its ledger and frontier and reuses their
//! allocations across queries.
//!
//! # Example
//!
//! ```
//! use crucible_core::CostGrid;
//! use crucible_paths::{CrucibleSearch, NoopObserver, RunLimits, SearchConfig};
//!
//! let grid = CostGrid::from_digits("1111\n9991\n9991").unwrap();
//! let mut search = CrucibleSearch::new(SearchConfig::new(RunLimits::CRUCIBLE).with_path(true));
//! let solution = search.run(&grid, &mut NoopObserver).unwrap();
//! assert_eq!(solution.cost, 5);
//! assert_eq!(solution.path.unwrap().overlay(&grid), "1>>>\n999v\n999v");
//! ```

mod config;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod ledger;
mod observer;
mod path;
mod search;
mod state;
mod traits;
mod transition;

/// Accumulated path cost.
pub type Cost = u64;

pub use config::{RunLimits, SearchConfig};
pub use dijkstra::unconstrained_cost;
pub use distance::{estimate, manhattan};
pub use error::SearchError;
pub use frontier::{Frontier, FrontierEntry};
pub use ledger::CostLedger;
pub use observer::{LogObserver, NoopObserver, SearchObserver};
pub use path::Path;
pub use search::{
    CrucibleSearch, SearchStats, SearchStatus, Solution, search_all, shortest_constrained_path,
};
pub use state::{Move, State};
pub use traits::CostMap;
pub use transition::Transition;
