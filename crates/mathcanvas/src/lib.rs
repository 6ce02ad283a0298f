//! Geometric layout for typeset math.
//!
//! A tree of [`RenderNode`]s (symbols and spans) is walked once by a
//! [`LayoutBuilder`], which threads an immutable [`RenderingState`] through the
//! recursion and produces a single aligned [`VerticalList`] whose leaves are
//! positioned and sized, ready for any [`CanvasPainter`].

mod builder;
mod config;
mod error;
mod render_node;
mod state;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use render_node::*;
pub use state::*;

pub use mathcanvas_graphics::{Bounds, Color, Em, Font, Margin, Point};
pub use mathcanvas_layout::{
    paint, paint_list, CanvasNode, CanvasPainter, DisplayList, DrawCommand, HorizontalAlignment,
    MonospacedTextMeasurer, StyleClasses, TextMeasurer, TextMetrics, TextNode, VerticalList,
    VerticalListRow,
};

pub mod prelude {
    pub use crate::builder::{layout, LayoutBuilder};
    pub use crate::config::LayoutConfig;
    pub use crate::error::LayoutError;
    pub use crate::render_node::{NodeStyle, RenderNode};
    pub use mathcanvas_graphics::prelude::*;
    pub use mathcanvas_layout::prelude::*;
}
