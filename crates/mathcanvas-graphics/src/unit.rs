//! Unit types and conversions

/// Length relative to the font size in effect where it is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Em(pub f32);

impl Em {
    pub fn to_px(&self, font_size: f32) -> f32 {
        self.0 * font_size
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

