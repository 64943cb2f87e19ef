//! Formatting error type

use std::fmt;

/// Raised when a duration cannot be rendered as elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatError {
    /// Duration is below zero
    Negative(f64),
    /// Duration is NaN or infinite
    NonFinite(f64),
    /// Duration does not fit into whole seconds
    OutOfRange(f64),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Negative(value) => write!(f, "cannot format negative duration: {}s", value),
            FormatError::NonFinite(value) => write!(f, "cannot format non-finite duration: {}", value),
            FormatError::OutOfRange(value) => write!(f, "duration out of range: {}s", value),
        }
    }
}

impl std::error::Error for FormatError {}
