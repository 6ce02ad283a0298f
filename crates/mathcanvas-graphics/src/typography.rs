//! Font descriptors handed to text measurement and painting

/// Family used when nothing else is configured.
pub const DEFAULT_FAMILY: &str = "KaTeX_Main";

/// Font size in canvas units used when nothing else is configured.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// A font descriptor: family plus size in canvas units.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            size,
        }
    }

    /// CSS-style shorthand, e.g. `10px KaTeX_Main`.
    pub fn css(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, DEFAULT_FONT_SIZE)
    }
}
