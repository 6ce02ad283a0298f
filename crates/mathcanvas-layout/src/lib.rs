//! Positioned canvas node tree and alignment policies for mathcanvas

mod alignment;
mod classes;
mod list;
mod node;
mod paint;
mod row;
mod text;

pub use alignment::*;
pub use classes::*;
pub use list::*;
pub use node::*;
pub use paint::*;
pub use row::*;
pub use text::*;

pub use mathcanvas_graphics::{Bounds, Color, Em, Font, Margin, Point};

pub mod prelude {
    pub use crate::alignment::HorizontalAlignment;
    pub use crate::classes::StyleClasses;
    pub use crate::list::VerticalList;
    pub use crate::node::{CanvasNode, TextNode};
    pub use crate::paint::{paint, CanvasPainter, DisplayList, DrawCommand};
    pub use crate::row::VerticalListRow;
    pub use crate::text::{MonospacedTextMeasurer, TextMeasurer, TextMetrics};
}
