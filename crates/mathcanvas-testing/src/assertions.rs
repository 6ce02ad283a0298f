//! Assertion helpers for positioned trees
//!
//! Positions are floating point, so most helpers compare within a tolerance.

use mathcanvas_graphics::Bounds;
use mathcanvas_layout::VerticalList;

pub const DEFAULT_TOLERANCE: f32 = 1e-4;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_bounds_approx_eq(actual: Bounds, expected: Bounds, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}

/// `(text, x)` for every leaf of `list` in paint order.
pub fn leaf_positions(list: &VerticalList) -> Vec<(String, f32)> {
    list.text_nodes()
        .iter()
        .map(|leaf| (leaf.text().to_string(), leaf.position().x))
        .collect()
}

/// Assert the leaves of `list` are exactly `expected`, comparing x within
/// [`DEFAULT_TOLERANCE`].
pub fn assert_leaf_positions(list: &VerticalList, expected: &[(&str, f32)]) {
    let actual = leaf_positions(list);
    let texts: Vec<&str> = actual.iter().map(|(text, _)| text.as_str()).collect();
    let expected_texts: Vec<&str> = expected.iter().map(|(text, _)| *text).collect();
    assert_eq!(texts, expected_texts, "leaf texts differ");
    for ((text, x), (_, expected_x)) in actual.iter().zip(expected) {
        assert_approx_eq(*x, *expected_x, DEFAULT_TOLERANCE, &format!("x of {text:?}"));
    }
}

/// Assert every row of `list` ends at the list's right edge.
pub fn assert_rows_share_right_edge(list: &VerticalList) {
    let right = list.bounds().right();
    for (index, row) in list.rows().iter().enumerate() {
        assert_approx_eq(
            row.bounds().right(),
            right,
            DEFAULT_TOLERANCE,
            &format!("right edge of row {index}"),
        );
    }
}

/// Assert every row of `list` is centered under the list's midpoint.
pub fn assert_rows_share_center(list: &VerticalList) {
    let center = list.bounds().center_x();
    for (index, row) in list.rows().iter().enumerate() {
        assert_approx_eq(
            row.bounds().center_x(),
            center,
            DEFAULT_TOLERANCE,
            &format!("center of row {index}"),
        );
    }
}
