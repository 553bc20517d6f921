//! **crucible-core**: grid primitives for run-constrained path search.
//!
//! This crate provides the foundational types shared by the search engine
//! and its callers: geometry primitives, compass headings, the immutable
//! [`CostGrid`] and a loader for digit-matrix text.

pub mod dir;
pub mod geom;
pub mod grid;
pub mod load;

pub use dir::Direction;
pub use geom::{Point, Range};
pub use grid::{CostGrid, GridError};
pub use load::ParseGridError;
