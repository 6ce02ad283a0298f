//! Canvas nodes: the positioned, sized representation of typeset content.

use mathcanvas_graphics::{Bounds, Color, Font, Margin, Point};

use crate::classes::StyleClasses;
use crate::list::VerticalList;
use crate::row::VerticalListRow;
use crate::text::TextMeasurer;

/// A node of the positioned tree.
///
/// Leaves carry text; rows and lists own their children exclusively and
/// derive their bounds from them on every read.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasNode {
    Text(TextNode),
    Row(VerticalListRow),
    List(VerticalList),
}

impl CanvasNode {
    pub fn position(&self) -> Point {
        match self {
            CanvasNode::Text(node) => node.position(),
            CanvasNode::Row(row) => row.position(),
            CanvasNode::List(list) => list.position(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            CanvasNode::Text(node) => node.bounds(),
            CanvasNode::Row(row) => row.bounds(),
            CanvasNode::List(list) => list.bounds(),
        }
    }

    /// Bounds of whatever this node draws, `None` for containers that hold
    /// no text at any depth.
    pub fn content_bounds(&self) -> Option<Bounds> {
        match self {
            CanvasNode::Text(node) => Some(node.bounds()),
            CanvasNode::Row(row) => row.content_bounds(),
            CanvasNode::List(list) => list.content_bounds(),
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        match self {
            CanvasNode::Text(node) => node.set_position(x, y),
            CanvasNode::Row(row) => row.set_position(x, y),
            CanvasNode::List(list) => list.set_position(x, y),
        }
    }

    pub fn margin(&self) -> Margin {
        match self {
            CanvasNode::Text(node) => node.margin(),
            CanvasNode::Row(row) => row.margin(),
            CanvasNode::List(list) => list.margin(),
        }
    }

    pub fn set_margin(&mut self, margin: Margin) {
        match self {
            CanvasNode::Text(node) => node.set_margin(margin),
            CanvasNode::Row(row) => row.set_margin(margin),
            CanvasNode::List(list) => list.set_margin(margin),
        }
    }

    pub fn classes(&self) -> &StyleClasses {
        match self {
            CanvasNode::Text(node) => node.classes(),
            CanvasNode::Row(row) => row.classes(),
            CanvasNode::List(list) => list.classes(),
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            CanvasNode::Text(node) => Some(node),
            _ => None,
        }
    }

    /// Collects every text leaf below this node in paint order.
    pub fn text_nodes(&self) -> Vec<&TextNode> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text<'a>(&'a self, out: &mut Vec<&'a TextNode>) {
        match self {
            CanvasNode::Text(node) => out.push(node),
            CanvasNode::Row(row) => {
                for cell in row.cells() {
                    cell.collect_text(out);
                }
            }
            CanvasNode::List(list) => out.extend(list.text_nodes()),
        }
    }
}

impl From<TextNode> for CanvasNode {
    fn from(node: TextNode) -> Self {
        CanvasNode::Text(node)
    }
}

impl From<VerticalListRow> for CanvasNode {
    fn from(row: VerticalListRow) -> Self {
        CanvasNode::Row(row)
    }
}

impl From<VerticalList> for CanvasNode {
    fn from(list: VerticalList) -> Self {
        CanvasNode::List(list)
    }
}

/// A run of text drawn with one font and one color.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    text: String,
    font: Font,
    color: Color,
    classes: StyleClasses,
    margin: Margin,
    bounds: Bounds,
}

impl TextNode {
    pub fn new(text: impl Into<String>, font: Font, color: Color, classes: StyleClasses) -> Self {
        Self {
            text: text.into(),
            font,
            color,
            classes,
            margin: Margin::ZERO,
            bounds: Bounds::ZERO,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn classes(&self) -> &StyleClasses {
        &self.classes
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn set_margin(&mut self, margin: Margin) {
        self.margin = margin;
    }

    pub fn position(&self) -> Point {
        self.bounds.origin()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    /// Measures the text under this node's font and stores the width.
    ///
    /// Height is left untouched; vertical metrics are not tracked.
    pub fn update_size(&mut self, measurer: &dyn TextMeasurer) {
        let metrics = measurer.measure(&self.text, &self.font);
        debug_assert!(
            metrics.width >= 0.0 && metrics.width.is_finite(),
            "measurer returned width {} for {:?}",
            metrics.width,
            self.text
        );
        self.bounds.width = metrics.width;
    }
}

#[cfg(test)]
#[path = "tests/node_tests.rs"]
mod tests;
