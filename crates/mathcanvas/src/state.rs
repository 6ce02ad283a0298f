use mathcanvas_graphics::{Color, Font, Margin};
use mathcanvas_layout::{StyleClasses, VerticalList};

use crate::config::LayoutConfig;
use crate::render_node::NodeStyle;

/// The drawing state in effect at one depth of the build recursion.
///
/// Values are never changed in place. Each derivation returns a new state, so
/// a caller that keeps its own copy can restore it once a child scope ends.
/// The list under construction is threaded separately as `&mut VerticalList`.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderingState {
    pub y: f32,
    /// Spacing waiting to be applied to the next placed leaf.
    pub margin: Margin,
    pub font_size: f32,
    pub color: Color,
    pub classes: StyleClasses,
}

impl RenderingState {
    pub fn initial(config: &LayoutConfig) -> Self {
        Self {
            y: config.baseline,
            margin: Margin::ZERO,
            font_size: config.font_size,
            color: config.color,
            classes: StyleClasses::new(),
        }
    }

    /// X coordinate for the next leaf: the list's next placement plus the
    /// pending left margin.
    pub fn next_x(&self, list: &VerticalList) -> f32 {
        list.next_node_placement() + self.margin.left
    }

    pub fn reset_margins(&self) -> Self {
        Self {
            margin: Margin::ZERO,
            ..self.clone()
        }
    }

    /// Applies a node's style and classes on top of this state.
    ///
    /// Margins given in ems resolve against the resulting font size and
    /// replace whatever margin was pending on that side.
    pub fn with_style(&self, style: &NodeStyle, classes: &[String]) -> Self {
        let font_size = style.font_size.unwrap_or(self.font_size);
        let mut margin = self.margin;
        if let Some(left) = style.margin_left {
            margin.left = left.to_px(font_size);
        }
        if let Some(right) = style.margin_right {
            margin.right = right.to_px(font_size);
        }
        Self {
            y: self.y,
            margin,
            font_size,
            color: style.color.unwrap_or(self.color),
            classes: self.classes.union(classes.iter().map(String::as_str)),
        }
    }

    pub fn font(&self, family: &str) -> Font {
        Font::new(family, self.font_size)
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
