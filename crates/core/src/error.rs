use std::fmt;

/// Construction-time failures. Gameplay commands never fail; they report
/// rejected moves through their return values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Zero columns or rows
    InvalidDimensions { cols: u16, rows: u16 },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidDimensions { cols, rows } => {
                write!(f, "invalid board dimensions {}x{} (cols x rows)", cols, rows)
            }
        }
    }
}

impl std::error::Error for CoreError {}
