//! Aspect-ratio grid sizing.
//!
//! Given `count` items that must keep a fixed width/height ratio, find the
//! widest item size that still lets every item fit in the container. Tries
//! one column, then two, and so on, stopping at the first column count
//! whose rows fit vertically.

use serde::{Deserialize, Serialize};

/// Container dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Result of fitting items into a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    /// Item width, rounded down to whole points.
    pub item_width: f64,
}

impl GridLayout {
    /// Fit `count` items of the given width/height `aspect_ratio` into `size`.
    ///
    /// An empty item list, a non-positive or non-finite aspect ratio, an
    /// unusable width or a NaN height give a zero layout. An unbounded
    /// height fits everything in one column.
    ///
    /// ```
    /// use card_table::layout::{GridLayout, Size};
    ///
    /// let layout = GridLayout::fit(12, Size::new(390.0, 600.0), 2.0 / 3.0);
    /// assert_eq!(layout.columns, 4);
    /// assert_eq!(layout.rows, 3);
    /// assert_eq!(layout.item_width, 97.0);
    /// ```
    #[must_use]
    pub fn fit(count: usize, size: Size, aspect_ratio: f64) -> Self {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if count == 0 || !usable(aspect_ratio) || !usable(size.width) || size.height.is_nan() {
            return Self::default();
        }

        for columns in 1..=count {
            let width = size.width / columns as f64;
            let height = width / aspect_ratio;
            let rows = count.div_ceil(columns);
            if rows as f64 * height <= size.height {
                return Self {
                    columns,
                    rows,
                    item_width: width.floor(),
                };
            }
        }

        // Nothing fits: a single row, as wide as the height allows.
        let width = (size.width / count as f64).min(size.height * aspect_ratio);
        Self {
            columns: count,
            rows: 1,
            item_width: width.floor().max(0.0),
        }
    }
}

/// Widest item width that fits `count` items into `size`.
///
/// Returns 0 for `count == 0` or a degenerate aspect ratio.
#[must_use]
pub fn grid_item_width_that_fits(count: usize, size: Size, aspect_ratio: f64) -> f64 {
    GridLayout::fit(count, size, aspect_ratio).item_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_fills_width() {
        assert_eq!(grid_item_width_that_fits(1, Size::new(300.0, 1000.0), 1.0), 300.0);
    }

    #[test]
    fn test_tall_container_uses_one_column() {
        let layout = GridLayout::fit(3, Size::new(100.0, 300.0), 1.0);
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.rows, 3);
        assert_eq!(layout.item_width, 100.0);
    }

    #[test]
    fn test_rounds_down() {
        // Three columns of 33.33
        let layout = GridLayout::fit(3, Size::new(100.0, 40.0), 1.0);
        assert_eq!(layout.columns, 3);
        assert_eq!(layout.item_width, 33.0);
    }

    #[test]
    fn test_fallback_when_nothing_fits() {
        // Even one row of 4 squares (25 high) exceeds 10 high
        let layout = GridLayout::fit(4, Size::new(100.0, 10.0), 1.0);
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.item_width, 10.0);
    }

    #[test]
    fn test_degenerate_inputs_return_zero() {
        let size = Size::new(390.0, 600.0);
        assert_eq!(grid_item_width_that_fits(0, size, 2.0 / 3.0), 0.0);
        assert_eq!(grid_item_width_that_fits(5, size, 0.0), 0.0);
        assert_eq!(grid_item_width_that_fits(5, size, -1.0), 0.0);
        assert_eq!(grid_item_width_that_fits(5, size, f64::NAN), 0.0);
        assert_eq!(grid_item_width_that_fits(5, Size::new(0.0, 600.0), 1.0), 0.0);
    }

    #[test]
    fn test_unbounded_height_uses_one_column() {
        let layout = GridLayout::fit(3, Size::new(100.0, f64::INFINITY), 1.0);
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.rows, 3);
        assert_eq!(layout.item_width, 100.0);

        assert_eq!(grid_item_width_that_fits(3, Size::new(100.0, f64::NAN), 1.0), 0.0);
        assert_eq!(grid_item_width_that_fits(3, Size::new(100.0, f64::NEG_INFINITY), 1.0), 0.0);
    }

    #[test]
    fn test_negative_height_never_negative_width() {
        assert_eq!(grid_item_width_that_fits(5, Size::new(100.0, -50.0), 1.0), 0.0);
    }
}
