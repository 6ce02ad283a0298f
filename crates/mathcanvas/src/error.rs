#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    InvalidFontSize { size: f32 },
    NonFiniteMargin { value: f32 },
    InvalidConfig { reason: &'static str },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::InvalidFontSize { size } => {
                write!(f, "font size {size} is not a positive finite number")
            }
            LayoutError::NonFiniteMargin { value } => write!(f, "margin {value} is not finite"),
            LayoutError::InvalidConfig { reason } => write!(f, "invalid layout config: {reason}"),
        }
    }
}

impl std::error::Error for LayoutError {}
