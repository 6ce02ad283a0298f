use super::*;

#[test]
fn extend_covers_both_rectangles() {
    let mut bounds = Bounds::new(10.0, 5.0, 20.0, 10.0);
    bounds.extend(&Bounds::new(0.0, 8.0, 5.0, 20.0));
    assert_eq!(bounds, Bounds::new(0.0, 5.0, 30.0, 23.0));
}

#[test]
fn extend_with_contained_rectangle_is_noop() {
    let mut bounds = Bounds::new(0.0, 0.0, 100.0, 50.0);
    bounds.extend(&Bounds::new(10.0, 10.0, 5.0, 5.0));
    assert_eq!(bounds, Bounds::new(0.0, 0.0, 100.0, 50.0));
}

#[test]
fn union_all_does_not_include_origin() {
    let union = Bounds::union_all([
        Bounds::new(40.0, 0.0, 10.0, 0.0),
        Bounds::new(50.0, 0.0, 6.0, 0.0),
    ])
    .expect("non-empty input");
    assert_eq!(union.x, 40.0);
    assert_eq!(union.width, 16.0);
}

#[test]
fn union_all_of_nothing_is_none() {
    assert_eq!(Bounds::union_all(Vec::<Bounds>::new()), None);
}

#[test]
fn union_all_seeds_with_first_rectangle() {
    let only = Bounds::new(3.0, 4.0, 5.0, 6.0);
    assert_eq!(Bounds::union_all([only]), Some(only));
}

#[test]
fn margin_accumulates() {
    let mut margin = Margin::new(1.0, 2.0);
    margin += Margin::new(0.5, 0.5);
    assert_eq!(margin, Margin::new(1.5, 2.5));
    assert_eq!(margin.horizontal_sum(), 4.0);
    assert!(!margin.is_zero());
    assert!(Margin::ZERO.is_zero());
}

#[test]
fn center_and_right_edges() {
    let bounds = Bounds::new(10.0, 0.0, 20.0, 4.0);
    assert_eq!(bounds.right(), 30.0);
    assert_eq!(bounds.center_x(), 20.0);
    assert!(bounds.contains(15.0, 2.0));
    assert!(!bounds.contains(31.0, 2.0));
}
