use mathcanvas_graphics::{Bounds, Margin, Point};

use crate::classes::StyleClasses;
use crate::node::CanvasNode;

/// A horizontal run of cells sharing one baseline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerticalListRow {
    cells: Vec<CanvasNode>,
    classes: StyleClasses,
    margin: Margin,
    // Only observable while the row has no cells.
    position: Point,
}

impl VerticalListRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cell(&mut self, cell: impl Into<CanvasNode>) {
        self.cells.push(cell.into());
    }

    pub fn cells(&self) -> &[CanvasNode] {
        &self.cells
    }

    pub fn last_cell(&self) -> Option<&CanvasNode> {
        self.cells.last()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
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

    /// Union of the cells' bounds, recomputed on every call.
    ///
    /// Cells without content are left out of the union; a row with no
    /// content at all reports [`Bounds::ZERO`].
    pub fn bounds(&self) -> Bounds {
        self.content_bounds().unwrap_or(Bounds::ZERO)
    }

    pub fn content_bounds(&self) -> Option<Bounds> {
        Bounds::union_all(self.cells.iter().filter_map(CanvasNode::content_bounds))
    }

    pub fn position(&self) -> Point {
        match self.content_bounds() {
            Some(bounds) => bounds.origin(),
            None => self.position,
        }
    }

    /// Moves the row so its bounds start at `x`.
    ///
    /// Every cell is shifted by the same horizontal delta; `y` is assigned to
    /// each cell as is.
    pub fn set_position(&mut self, x: f32, y: f32) {
        if let Some(bounds) = self.content_bounds() {
            let dx = x - bounds.x;
            for cell in &mut self.cells {
                let cell_x = cell.position().x + dx;
                cell.set_position(cell_x, y);
            }
        }
        self.position = Point::new(x, y);
    }

    pub fn left_align(&mut self, left: f32) {
        let y = self.position().y;
        self.set_position(left, y);
    }

    pub fn center_align(&mut self, center: f32) {
        let y = self.position().y;
        let width = self.bounds().width;
        self.set_position(center - width / 2.0, y);
    }

    pub fn right_align(&mut self, right: f32) {
        let y = self.position().y;
        let width = self.bounds().width;
        self.set_position(right - width, y);
    }
}

#[cfg(test)]
#[path = "tests/row_tests.rs"]
mod tests;
