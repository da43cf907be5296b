//! Layout helpers for presenting cards.
//!
//! - `GridLayout`: column/row count and item width for a container
//! - `grid_item_width_that_fits`: just the width

pub mod grid;

pub use grid::{grid_item_width_that_fits, GridLayout, Size};
