use mathcanvas_graphics::{Color, DEFAULT_FAMILY, DEFAULT_FONT_SIZE};
use mathcanvas_layout::HorizontalAlignment;

use crate::error::LayoutError;

/// Settings for one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub font_family: String,
    pub font_size: f32,
    pub color: Color,
    pub alignment: HorizontalAlignment,
    /// X coordinate where the first cell of a row is placed.
    pub row_start: f32,
    /// Y coordinate shared by every leaf.
    pub baseline: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::BLACK,
            alignment: HorizontalAlignment::Left,
            row_start: 0.0,
            baseline: 0.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_row_start(mut self, row_start: f32) -> Self {
        self.row_start = row_start;
        self
    }

    pub fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(LayoutError::InvalidFontSize {
                size: self.font_size,
            });
        }
        if !self.row_start.is_finite() {
            return Err(LayoutError::InvalidConfig {
                reason: "row start must be finite",
            });
        }
        if !self.baseline.is_finite() {
            return Err(LayoutError::InvalidConfig {
                reason: "baseline must be finite",
            });
        }
        if self.font_family.is_empty() {
            return Err(LayoutError::InvalidConfig {
                reason: "font family must not be empty",
            });
        }
        Ok(())
    }
}
