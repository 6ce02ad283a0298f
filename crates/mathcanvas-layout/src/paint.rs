//! Walking a finished tree on behalf of a painter.
//!
//! The engine never produces pixels; a painter receives every leaf in paint
//! order together with container boundaries and decides what to draw.

use mathcanvas_graphics::{Bounds, Color, Font, Point};

use crate::classes::StyleClasses;
use crate::list::VerticalList;
use crate::node::{CanvasNode, TextNode};
use crate::row::VerticalListRow;

pub trait CanvasPainter {
    fn draw_text(&mut self, node: &TextNode);

    fn enter_container(&mut self, _bounds: Bounds, _classes: &StyleClasses) {}

    fn exit_container(&mut self) {}
}

/// Visits `node` and its descendants depth-first.
pub fn paint<P: CanvasPainter + ?Sized>(node: &CanvasNode, painter: &mut P) {
    match node {
        CanvasNode::Text(text) => painter.draw_text(text),
        CanvasNode::Row(row) => paint_row(row, painter),
        CanvasNode::List(list) => paint_list(list, painter),
    }
}

pub fn paint_list<P: CanvasPainter + ?Sized>(list: &VerticalList, painter: &mut P) {
    painter.enter_container(list.bounds(), list.classes());
    for row in list.rows() {
        paint_row(row, painter);
    }
    painter.exit_container();
}

pub fn paint_row<P: CanvasPainter + ?Sized>(row: &VerticalListRow, painter: &mut P) {
    painter.enter_container(row.bounds(), row.classes());
    for cell in row.cells() {
        paint(cell, painter);
    }
    painter.exit_container();
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        font: Font,
        color: Color,
        origin: Point,
        classes: StyleClasses,
    },
}

/// Painter that records text draws instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    depth: usize,
    max_depth: usize,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(list: &VerticalList) -> Self {
        let mut display_list = Self::new();
        paint_list(list, &mut display_list);
        display_list
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Deepest container nesting seen while recording.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl CanvasPainter for DisplayList {
    fn draw_text(&mut self, node: &TextNode) {
        self.commands.push(DrawCommand::Text {
            text: node.text().to_owned(),
            font: node.font().clone(),
            color: node.color(),
            origin: node.position(),
            classes: node.classes().clone(),
        });
    }

    fn enter_container(&mut self, _bounds: Bounds, _classes: &StyleClasses) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn exit_container(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
#[path = "tests/paint_tests.rs"]
mod tests;
