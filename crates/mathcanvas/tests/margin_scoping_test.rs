//! Margins are consumed once and never cross sibling boundaries.

use mathcanvas::*;
use mathcanvas_testing::*;

fn build(tree: &RenderNode) -> VerticalList {
    layout(tree, FixedAdvanceMeasurer::new(10.0), LayoutConfig::default()).expect("layout")
}

#[test]
fn left_margin_only_moves_its_own_leaf() {
    let tree = RenderNode::span(vec![
        RenderNode::symbol("a").with_margin_left(Em(0.5)),
        RenderNode::symbol("b"),
        RenderNode::symbol("c"),
    ]);
    assert_leaf_positions(&build(&tree), &[("a", 5.0), ("b", 15.0), ("c", 25.0)]);
}

#[test]
fn span_margin_does_not_reach_the_spans_siblings() {
    let tree = RenderNode::span(vec![
        RenderNode::span(vec![RenderNode::symbol("a")]).with_margin_left(Em(1.0)),
        RenderNode::symbol("b"),
        RenderNode::span(vec![RenderNode::symbol("c")]),
    ]);
    assert_leaf_positions(&build(&tree), &[("a", 10.0), ("b", 20.0), ("c", 30.0)]);
}

#[test]
fn nested_span_restores_the_enclosing_state() {
    // The inner span consumes the inherited margin within its own scope; once
    // it returns, the outer span continues from its pre-descent state.
    let tree = RenderNode::span(vec![
        RenderNode::span(vec![RenderNode::symbol("a")]),
        RenderNode::symbol("b"),
    ])
    .with_margin_left(Em(0.2));
    assert_leaf_positions(&build(&tree), &[("a", 2.0), ("b", 14.0)]);
}

#[test]
fn right_margin_travels_with_the_placed_leaf() {
    let tree = RenderNode::span(vec![
        RenderNode::span(vec![RenderNode::symbol("=")]).with_margin_right(Em(0.3)),
        RenderNode::symbol("x"),
    ]);
    let list = build(&tree);
    assert_leaf_positions(&list, &[("=", 0.0), ("x", 13.0)]);
    assert_eq!(list.text_nodes()[1].margin(), Margin::ZERO);
}

#[test]
fn empty_leaf_margin_is_dropped_not_carried_forward() {
    let tree = RenderNode::span(vec![
        RenderNode::symbol("").with_margin_left(Em(2.0)),
        RenderNode::symbol("a"),
    ]);
    assert_leaf_positions(&build(&tree), &[("a", 0.0)]);
}

#[test]
fn styles_are_scoped_like_margins() {
    let tree = RenderNode::span(vec![
        RenderNode::span(vec![
            RenderNode::symbol("a"),
            RenderNode::span(vec![RenderNode::symbol("b")]).with_color(Color::BLUE),
            RenderNode::symbol("c"),
        ])
        .with_color(Color::RED)
        .with_class("mord"),
        RenderNode::symbol("d"),
    ]);
    let list = build(&tree);
    let colors: Vec<Color> = list.text_nodes().iter().map(|leaf| leaf.color()).collect();
    assert_eq!(colors, vec![Color::RED, Color::BLUE, Color::RED, Color::BLACK]);
    let classed: Vec<bool> = list
        .text_nodes()
        .iter()
        .map(|leaf| leaf.classes().contains("mord"))
        .collect();
    assert_eq!(classed, vec![true, true, true, false]);
}
