use super::*;
use crate::text::MonospacedTextMeasurer;

fn list_with(texts: &[&str]) -> VerticalList {
    let measurer = MonospacedTextMeasurer::default();
    let mut list = VerticalList::new(Default::default(), 0.0);
    list.add_row(VerticalListRow::new());
    for value in texts {
        let mut node = TextNode::new(
            *value,
            Font::default(),
            Color::RED,
            ["mord"].into_iter().collect(),
        );
        node.update_size(&measurer);
        let x = list.next_node_placement();
        node.set_position(x, 0.0);
        list.add_cell(node);
    }
    list
}

#[test]
fn display_list_records_leaves_in_order() {
    let list = list_with(&["a", "bc"]);
    let display_list = DisplayList::record(&list);

    let origins: Vec<(String, Point)> = display_list
        .commands()
        .iter()
        .map(|command| match command {
            DrawCommand::Text { text, origin, .. } => (text.clone(), *origin),
        })
        .collect();
    assert_eq!(
        origins,
        vec![
            ("a".to_string(), Point::new(0.0, 0.0)),
            ("bc".to_string(), Point::new(5.0, 0.0)),
        ]
    );
}

#[test]
fn display_list_keeps_style() {
    let list = list_with(&["q"]);
    let commands = DisplayList::record(&list).into_commands();
    let DrawCommand::Text {
        color,
        classes,
        font,
        ..
    } = &commands[0];
    assert_eq!(*color, Color::RED);
    assert!(classes.contains("mord"));
    assert_eq!(font.size, 10.0);
}

#[test]
fn nested_rows_report_depth() {
    let mut list = list_with(&["a"]);
    let mut nested = VerticalListRow::new();
    nested.add_cell(TextNode::new(
        "b",
        Font::default(),
        Color::BLACK,
        StyleClasses::new(),
    ));
    list.add_cell(nested);

    let display_list = DisplayList::record(&list);
    assert_eq!(display_list.commands().len(), 2);
    assert_eq!(display_list.max_depth(), 3);
}
