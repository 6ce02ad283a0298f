//! Deterministic text measurers for tests and benchmarks

use std::cell::RefCell;
use std::collections::HashMap;

use mathcanvas_graphics::Font;
use mathcanvas_layout::{TextMeasurer, TextMetrics};

/// Gives every character the same absolute advance, whatever the font.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub advance: f32,
}

impl FixedAdvanceMeasurer {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, _font: &Font) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.advance,
        }
    }
}

/// Looks whole strings up in a table, falling back to a per-character advance.
#[derive(Clone, Debug, Default)]
pub struct TableMeasurer {
    widths: HashMap<String, f32>,
    fallback_advance: f32,
}

impl TableMeasurer {
    pub fn new(fallback_advance: f32) -> Self {
        Self {
            widths: HashMap::new(),
            fallback_advance,
        }
    }

    pub fn with(mut self, text: impl Into<String>, width: f32) -> Self {
        self.widths.insert(text.into(), width);
        self
    }
}

impl TextMeasurer for TableMeasurer {
    fn measure(&self, text: &str, _font: &Font) -> TextMetrics {
        let width = self
            .widths
            .get(text)
            .copied()
            .unwrap_or(text.chars().count() as f32 * self.fallback_advance);
        TextMetrics { width }
    }
}

/// Wraps another measurer and remembers every request.
#[derive(Debug, Default)]
pub struct RecordingMeasurer<M> {
    inner: M,
    calls: RefCell<Vec<(String, Font)>>,
}

impl<M> RecordingMeasurer<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Font)> {
        self.calls.borrow().clone()
    }

    pub fn measured_texts(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(text, _)| text.clone())
            .collect()
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingMeasurer<M> {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        self.calls
            .borrow_mut()
            .push((text.to_string(), font.clone()));
        self.inner.measure(text, font)
    }
}
