//! Row alignment against the list's own bounds.

use mathcanvas::*;
use mathcanvas_testing::*;

fn row(x: f32, text: &str) -> VerticalListRow {
    let mut leaf = TextNode::new(text, Font::default(), Color::BLACK, StyleClasses::new());
    leaf.update_size(&FixedAdvanceMeasurer::new(10.0));
    leaf.set_position(x, 0.0);
    let mut row = VerticalListRow::new();
    row.add_cell(leaf);
    row
}

fn list(alignment: HorizontalAlignment, rows: Vec<VerticalListRow>) -> VerticalList {
    let mut list = VerticalList::new(alignment, 0.0);
    for row in rows {
        list.add_row(row);
    }
    list
}

#[test]
fn centered_rows_share_midpoint_in_any_order() {
    for rows in [
        vec![row(0.0, "a"), row(0.0, "bb")],
        vec![row(0.0, "bb"), row(0.0, "a")],
    ] {
        let mut list = list(HorizontalAlignment::Center, rows);
        let midpoint = list.bounds().center_x();
        list.align();
        assert_rows_share_center(&list);
        assert_approx_eq(
            list.bounds().center_x(),
            midpoint,
            DEFAULT_TOLERANCE,
            "list midpoint",
        );
    }
}

#[test]
fn right_aligned_rows_share_right_edge() {
    let mut list = list(
        HorizontalAlignment::Right,
        vec![row(5.0, "abc"), row(0.0, "a")],
    );
    list.align();
    assert_rows_share_right_edge(&list);
    assert_approx_eq(list.bounds().right(), 35.0, DEFAULT_TOLERANCE, "right edge");
}

#[test]
fn left_aligned_rows_use_bounds_from_before_any_move() {
    let mut list = list(
        HorizontalAlignment::Left,
        vec![row(40.0, "a"), row(25.0, "a"), row(30.0, "a")],
    );
    list.align();
    for row in list.rows() {
        assert_approx_eq(row.bounds().x, 25.0, DEFAULT_TOLERANCE, "row x");
    }
}

#[test]
fn bounds_reads_are_idempotent_between_mutations() {
    let list = list(HorizontalAlignment::Left, vec![row(3.0, "ab"), row(8.0, "a")]);
    let first = list.bounds();
    assert_eq!(first, list.bounds());
    assert_bounds_approx_eq(
        first,
        Bounds::new(3.0, 0.0, 20.0, 0.0),
        DEFAULT_TOLERANCE,
        "union",
    );
}

#[test]
fn translating_the_list_shifts_every_leaf_by_the_same_delta() {
    let mut list = list(HorizontalAlignment::Left, vec![row(3.0, "ab"), row(8.0, "a")]);
    let before: Vec<f32> = list.text_nodes().iter().map(|leaf| leaf.position().x).collect();
    let delta = 50.0 - list.position().x;

    list.set_position(50.0, 2.0);

    let after: Vec<f32> = list.text_nodes().iter().map(|leaf| leaf.position().x).collect();
    for (old, new) in before.iter().zip(&after) {
        assert_approx_eq(*new, old + delta, DEFAULT_TOLERANCE, "shifted x");
    }
    assert!(list.text_nodes().iter().all(|leaf| leaf.position().y == 2.0));
}
