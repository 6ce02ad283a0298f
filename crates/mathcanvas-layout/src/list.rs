use mathcanvas_graphics::{Bounds, Margin, Point};

use crate::alignment::HorizontalAlignment;
use crate::classes::StyleClasses;
use crate::node::{CanvasNode, TextNode};
use crate::row::VerticalListRow;

/// Root container: a vertical stack of rows with one alignment policy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerticalList {
    rows: Vec<VerticalListRow>,
    alignment: HorizontalAlignment,
    row_start: f32,
    classes: StyleClasses,
    margin: Margin,
    position: Point,
}

impl VerticalList {
    pub fn new(alignment: HorizontalAlignment, row_start: f32) -> Self {
        Self {
            alignment,
            row_start,
            ..Self::default()
        }
    }

    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    pub fn row_start(&self) -> f32 {
        self.row_start
    }

    pub fn add_row(&mut self, row: VerticalListRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[VerticalListRow] {
        &self.rows
    }

    pub fn current_row(&self) -> Option<&VerticalListRow> {
        self.rows.last()
    }

    pub fn current_row_mut(&mut self) -> &mut VerticalListRow {
        if self.rows.is_empty() {
            self.rows.push(VerticalListRow::new());
        }
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Appends a cell to the last row.
    pub fn add_cell(&mut self, cell: impl Into<CanvasNode>) {
        self.current_row_mut().add_cell(cell);
    }

    /// X coordinate where the next cell of the current row begins.
    ///
    /// This is the right edge of the last placed cell plus its right margin,
    /// or `row_start` while the current row is empty. Pending left margins
    /// are added by the caller.
    pub fn next_node_placement(&self) -> f32 {
        match self.current_row().and_then(VerticalListRow::last_cell) {
            Some(cell) => cell.bounds().right() + cell.margin().right,
            None => self.row_start,
        }
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

    /// Union of the rows' bounds, recomputed on every call.
    ///
    /// Rows without content are left out so they never drag the origin in.
    pub fn bounds(&self) -> Bounds {
        self.content_bounds().unwrap_or(Bounds::ZERO)
    }

    pub fn content_bounds(&self) -> Option<Bounds> {
        Bounds::union_all(self.rows.iter().filter_map(VerticalListRow::content_bounds))
    }

    pub fn position(&self) -> Point {
        match self.content_bounds() {
            Some(bounds) => bounds.origin(),
            None => self.position,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        if let Some(bounds) = self.content_bounds() {
            let dx = x - bounds.x;
            for row in &mut self.rows {
                let row_x = row.position().x + dx;
                row.set_position(row_x, y);
            }
        }
        self.position = Point::new(x, y);
    }

    /// Aligns every row against the list's bounds as they were on entry.
    pub fn align(&mut self) {
        let reference = self.bounds();
        log::trace!(
            "aligning {} rows {} within {:?}",
            self.rows.len(),
            self.alignment.as_str(),
            reference
        );
        match self.alignment {
            HorizontalAlignment::Left => {
                for row in &mut self.rows {
                    row.left_align(reference.x);
                }
            }
            HorizontalAlignment::Center => {
                let center = reference.center_x();
                for row in &mut self.rows {
                    row.center_align(center);
                }
            }
            HorizontalAlignment::Right => {
                let right = reference.right();
                for row in &mut self.rows {
                    row.right_align(right);
                }
            }
        }
    }

    /// Every text leaf in the list, row by row, in paint order.
    pub fn text_nodes(&self) -> Vec<&TextNode> {
        let mut out = Vec::new();
        for row in &self.rows {
            for cell in row.cells() {
                cell.collect_text(&mut out);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
