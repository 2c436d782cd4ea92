//! Island analysis over 2D land/water grids.
//!
//! This crate implements the bounded grid, the worklist-based flood fill,
//! and the connected-component (island) counting built on top of them.

pub mod grid;
pub mod flood;
pub mod analysis;

pub use analysis::{analyze, count_islands, island_sizes, GridStats};
pub use grid::Grid;
