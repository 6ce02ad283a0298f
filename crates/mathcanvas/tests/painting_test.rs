use mathcanvas::*;
use mathcanvas_testing::*;

#[derive(Default)]
struct TextCollector {
    drawn: Vec<(String, Point)>,
    containers: usize,
}

impl CanvasPainter for TextCollector {
    fn draw_text(&mut self, node: &TextNode) {
        self.drawn.push((node.text().to_string(), node.position()));
    }

    fn enter_container(&mut self, _bounds: Bounds, _classes: &StyleClasses) {
        self.containers += 1;
    }
}

#[test]
fn painter_sees_every_leaf_once_in_document_order() {
    let tree = RenderNode::span(vec![
        RenderNode::symbol("x"),
        RenderNode::span(vec![RenderNode::symbol("+"), RenderNode::symbol("")]),
        RenderNode::symbol("y"),
    ]);
    let list = layout(&tree, FixedAdvanceMeasurer::new(4.0), LayoutConfig::default())
        .expect("layout");

    let mut painter = TextCollector::default();
    paint(&CanvasNode::List(list), &mut painter);

    assert_eq!(
        painter.drawn,
        vec![
            ("x".to_string(), Point::new(0.0, 0.0)),
            ("+".to_string(), Point::new(4.0, 0.0)),
            ("y".to_string(), Point::new(8.0, 0.0)),
        ]
    );
    assert_eq!(painter.containers, 2);
}

#[test]
fn display_list_carries_leaf_style() {
    let tree = RenderNode::span(vec![RenderNode::symbol("k").with_class("mathnormal")])
        .with_color(Color::GREEN);
    let list = layout(&tree, FixedAdvanceMeasurer::new(4.0), LayoutConfig::default())
        .expect("layout");

    let commands = DisplayList::record(&list).into_commands();
    assert_count(&commands, 1, "commands");
    let DrawCommand::Text {
        text,
        color,
        classes,
        font,
        ..
    } = &commands[0];
    assert_eq!(text, "k");
    assert_eq!(*color, Color::GREEN);
    assert!(classes.contains("mathnormal"));
    assert_eq!(font.css(), "10px KaTeX_Main");
}
