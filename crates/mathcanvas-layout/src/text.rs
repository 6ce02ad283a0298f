use mathcanvas_graphics::Font;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
}

/// Measures runs of text under a font.
///
/// Implementations must be deterministic and return a non-negative width in
/// the same units as canvas positions.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        (**self).measure(text, font)
    }
}

/// Headless measurer that gives every character the same advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospacedTextMeasurer {
    /// Advance of one character as a fraction of the font size.
    pub advance: f32,
}

impl MonospacedTextMeasurer {
    const DEFAULT_ADVANCE: f32 = 0.5;

    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for MonospacedTextMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE)
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.advance * font.size,
        }
    }
}
