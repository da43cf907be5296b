//! Grid sizing tests.

use card_table::layout::{grid_item_width_that_fits, GridLayout, Size};
use proptest::prelude::*;

/// Twelve 2:3 cards on a phone-sized container.
#[test]
fn test_phone_layout() {
    let size = Size::new(390.0, 600.0);
    let width = grid_item_width_that_fits(12, size, 2.0 / 3.0);

    assert_eq!(width, 97.0);
    assert!(width > 0.0 && width <= 390.0);

    // Pure: repeated and interleaved calls agree
    grid_item_width_that_fits(81, Size::new(10.0, 10.0), 1.0);
    assert_eq!(grid_item_width_that_fits(12, size, 2.0 / 3.0), width);
}

/// Zero items never divide by zero.
#[test]
fn test_zero_items() {
    for ratio in [0.0, 0.5, 1.0, 2.0] {
        assert_eq!(grid_item_width_that_fits(0, Size::new(390.0, 600.0), ratio), 0.0);
    }
    assert_eq!(GridLayout::fit(0, Size::new(390.0, 600.0), 1.0), GridLayout::default());
}

/// More items never get wider cells.
#[test]
fn test_width_shrinks_as_count_grows() {
    let size = Size::new(390.0, 600.0);
    let mut last = f64::INFINITY;
    for count in 1..=81 {
        let width = grid_item_width_that_fits(count, size, 2.0 / 3.0);
        assert!(width <= last, "count {} widened to {}", count, width);
        last = width;
    }
}

proptest! {
    /// A fitting layout really fits, and never exceeds the container.
    #[test]
    fn prop_layout_fits(
        count in 1usize..100,
        width in 1.0f64..2000.0,
        height in 1.0f64..2000.0,
        ratio in 0.1f64..10.0,
    ) {
        let size = Size::new(width, height);
        let layout = GridLayout::fit(count, size, ratio);

        prop_assert!(layout.item_width >= 0.0);
        prop_assert!(layout.item_width <= width);
        prop_assert!(layout.columns * layout.rows >= count);
        if layout.rows > 1 || layout.columns < count {
            prop_assert!(layout.rows as f64 * (layout.item_width / ratio) <= height);
        }
    }
}
