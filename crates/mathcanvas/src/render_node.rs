//! Input tree handed over by the math producer.

use mathcanvas_graphics::{Color, Em};

use crate::error::LayoutError;

/// Optional style carried by a render node.
///
/// A span's style applies to every descendant; a symbol's style applies to
/// that symbol alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeStyle {
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub margin_left: Option<Em>,
    pub margin_right: Option<Em>,
}

impl NodeStyle {
    pub fn is_empty(&self) -> bool {
        self == &NodeStyle::default()
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if let Some(size) = self.font_size {
            if !(size.is_finite() && size > 0.0) {
                return Err(LayoutError::InvalidFontSize { size });
            }
        }
        for margin in [self.margin_left, self.margin_right].into_iter().flatten() {
            if !margin.is_finite() {
                return Err(LayoutError::NonFiniteMargin { value: margin.0 });
            }
        }
        Ok(())
    }
}

/// A text-bearing leaf. The text may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolNode {
    pub text: String,
    pub classes: Vec<String>,
    pub style: NodeStyle,
}

/// A container of render nodes in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanNode {
    pub children: Vec<RenderNode>,
    pub classes: Vec<String>,
    pub style: NodeStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderNode {
    Symbol(SymbolNode),
    Span(SpanNode),
}

impl RenderNode {
    pub fn symbol(text: impl Into<String>) -> Self {
        RenderNode::Symbol(SymbolNode {
            text: text.into(),
            ..SymbolNode::default()
        })
    }

    pub fn span(children: Vec<RenderNode>) -> Self {
        RenderNode::Span(SpanNode {
            children,
            ..SpanNode::default()
        })
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Symbol(_) => &[],
            RenderNode::Span(span) => &span.children,
        }
    }

    pub fn classes(&self) -> &[String] {
        match self {
            RenderNode::Symbol(symbol) => &symbol.classes,
            RenderNode::Span(span) => &span.classes,
        }
    }

    pub fn style(&self) -> &NodeStyle {
        match self {
            RenderNode::Symbol(symbol) => &symbol.style,
            RenderNode::Span(span) => &span.style,
        }
    }

    fn style_mut(&mut self) -> &mut NodeStyle {
        match self {
            RenderNode::Symbol(symbol) => &mut symbol.style,
            RenderNode::Span(span) => &mut span.style,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let classes = match &mut self {
            RenderNode::Symbol(symbol) => &mut symbol.classes,
            RenderNode::Span(span) => &mut span.classes,
        };
        classes.push(class.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style_mut().color = Some(color);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.style_mut().font_size = Some(size);
        self
    }

    pub fn with_margin_left(mut self, margin: Em) -> Self {
        self.style_mut().margin_left = Some(margin);
        self
    }

    pub fn with_margin_right(mut self, margin: Em) -> Self {
        self.style_mut().margin_right = Some(margin);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(RenderNode::node_count)
            .sum::<usize>()
    }

    /// Checks every style in the subtree.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.style().validate()?;
        for child in self.children() {
            child.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/render_node_tests.rs"]
mod tests;
