//! Pure math/data for positioning and drawing in mathcanvas
//!
//! This crate contains the geometry primitives, color definitions, font
//! descriptors and unit types shared by the layout engine and its painters.

mod color;
mod geometry;
mod typography;
mod unit;

pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Bounds, Margin, Point};
    pub use crate::typography::Font;
    pub use crate::unit::Em;
}
