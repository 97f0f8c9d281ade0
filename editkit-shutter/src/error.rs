//! Error types for shutter calculations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for shutter calculations.
pub type Result<T> = std::result::Result<T, ShutterError>;

/// Errors that can occur deriving shutter parameters.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum ShutterError {
    /// A shutter angle outside the physical (0, 360] range.
    #[error("Invalid shutter angle: {angle} (expected 0 < angle <= 360)")]
    InvalidAngle {
        /// The rejected angle in degrees.
        angle: f64,
    },

    /// A non-positive frame rate.
    #[error("Invalid frame rate: {rate}")]
    InvalidRate {
        /// The rejected rate in frames per second.
        rate: f64,
    },

    /// A zero shutter speed denominator.
    #[error("Invalid shutter speed: 1/0")]
    InvalidSpeed,
}

impl ShutterError {
    /// Create an invalid angle error.
    pub fn invalid_angle(angle: f64) -> Self {
        Self::InvalidAngle { angle }
    }

    /// Create an invalid rate error.
    pub fn invalid_rate(rate: f64) -> Self {
        Self::InvalidRate { rate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShutterError::invalid_angle(400.0);
        assert_eq!(
            err.to_string(),
            "Invalid shutter angle: 400 (expected 0 < angle <= 360)"
        );

        let err = ShutterError::invalid_rate(0.0);
        assert_eq!(err.to_string(), "Invalid frame rate: 0");
    }
}
