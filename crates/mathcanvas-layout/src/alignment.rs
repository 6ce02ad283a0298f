//! Horizontal alignment policy for the rows of a vertical list

/// How the rows of a [`VerticalList`](crate::VerticalList) line up against
/// the list's own bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Every row starts at the list's left edge.
    #[default]
    Left,
    /// Every row is centered under the list's horizontal midpoint.
    Center,
    /// Every row ends at the list's right edge.
    Right,
}

impl HorizontalAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
        }
    }
}
