//! Error types for aspect-ratio geometry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for aspect-ratio operations.
pub type Result<T> = std::result::Result<T, AspectError>;

/// Errors that can occur computing delivery dimensions.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum AspectError {
    /// Source dimensions with a zero side.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Source width in pixels.
        width: u32,
        /// Source height in pixels.
        height: u32,
    },

    /// A target ratio with a non-positive term.
    #[error("Invalid aspect ratio: {horizontal}:{vertical}")]
    InvalidRatio {
        /// Horizontal ratio term.
        horizontal: String,
        /// Vertical ratio term.
        vertical: String,
    },
}

impl AspectError {
    /// Create an invalid dimensions error.
    pub fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidDimensions { width, height }
    }

    /// Create an invalid ratio error.
    pub fn invalid_ratio(horizontal: f64, vertical: f64) -> Self {
        Self::InvalidRatio {
            horizontal: horizontal.to_string(),
            vertical: vertical.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AspectError::invalid_dimensions(0, 1080);
        assert_eq!(err.to_string(), "Invalid dimensions: 0x1080");

        let err = AspectError::invalid_ratio(2.35, 0.0);
        assert_eq!(err.to_string(), "Invalid aspect ratio: 2.35:0");
    }
}
