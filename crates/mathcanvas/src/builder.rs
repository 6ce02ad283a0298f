use mathcanvas_layout::{TextMeasurer, TextNode, VerticalList, VerticalListRow};

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::render_node::{RenderNode, SpanNode, SymbolNode};
use crate::state::RenderingState;

/// Builds positioned canvas trees from render-node trees.
pub struct LayoutBuilder<M> {
    measurer: M,
    config: LayoutConfig,
}

impl<M: TextMeasurer> LayoutBuilder<M> {
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            config: LayoutConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Lays out `root` in a single pass and aligns the result.
    ///
    /// Input is validated up front; once that succeeds the build itself
    /// cannot fail.
    pub fn build(&self, root: &RenderNode) -> Result<VerticalList, LayoutError> {
        if let Err(err) = self.config.validate().and_then(|()| root.validate()) {
            log::warn!("rejecting layout input: {err}");
            return Err(err);
        }

        let mut list = VerticalList::new(self.config.alignment, self.config.row_start);
        list.add_row(VerticalListRow::new());

        let state = RenderingState::initial(&self.config);
        self.visit(root, state, &mut list);
        list.align();

        log::debug!(
            "built {} leaves from {} render nodes, bounds {:?}",
            list.text_nodes().len(),
            root.node_count(),
            list.bounds()
        );
        Ok(list)
    }

    /// Visits one node and returns the state its next sibling continues with.
    fn visit(
        &self,
        node: &RenderNode,
        state: RenderingState,
        list: &mut VerticalList,
    ) -> RenderingState {
        match node {
            RenderNode::Symbol(symbol) => self.place_symbol(symbol, state, list),
            RenderNode::Span(span) => self.visit_span(span, state, list),
        }
    }

    fn visit_span(
        &self,
        span: &SpanNode,
        state: RenderingState,
        list: &mut VerticalList,
    ) -> RenderingState {
        let mut inner = state.with_style(&span.style, &span.classes);
        for child in &span.children {
            inner = self.visit(child, inner, list);
        }
        // Whatever happened inside the span stays inside it.
        state
    }

    fn place_symbol(
        &self,
        symbol: &SymbolNode,
        state: RenderingState,
        list: &mut VerticalList,
    ) -> RenderingState {
        // Empty symbols place nothing, so any margin they carried is dropped.
        if symbol.text.is_empty() {
            log::trace!("skipping empty symbol {:?}", symbol.classes);
            return state;
        }

        let leaf = state.with_style(&symbol.style, &symbol.classes);
        let mut node = TextNode::new(
            symbol.text.as_str(),
            leaf.font(&self.config.font_family),
            leaf.color,
            leaf.classes.clone(),
        );
        node.update_size(&self.measurer);
        let x = leaf.next_x(list);
        node.set_position(x, leaf.y);
        node.set_margin(leaf.margin);
        log::trace!(
            "placed {:?} at ({x}, {}) width {}",
            symbol.text,
            leaf.y,
            node.bounds().width
        );
        list.add_cell(node);

        state.reset_margins()
    }
}

/// One-shot convenience around [`LayoutBuilder`].
pub fn layout<M: TextMeasurer>(
    root: &RenderNode,
    measurer: M,
    config: LayoutConfig,
) -> Result<VerticalList, LayoutError> {
    LayoutBuilder::new(measurer).with_config(config).build(root)
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
