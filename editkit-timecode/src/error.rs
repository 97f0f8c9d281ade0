//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
///
/// Malformed interactive input never surfaces here: the normalizer clamps
/// it, and arithmetic saturates instead of underflowing. The only error the
/// conversion path itself can raise is [`TimecodeError::UnsupportedFrameRate`].
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// A frame rate outside the supported production set.
    #[error("Unsupported frame rate: {rate}")]
    UnsupportedFrameRate {
        /// String representation of the rejected rate.
        rate: String,
    },

    /// A timecode component outside its valid range.
    #[error("Invalid timecode component: {component} = {value} (max {max})")]
    InvalidComponent {
        /// Name of the invalid component (hours, minutes, seconds, frames).
        component: String,
        /// The invalid value that was provided.
        value: u64,
        /// The maximum allowed value for this component.
        max: u64,
    },

    /// Invalid timecode format in a string.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// A drop-frame label that does not exist on the drop-frame grid.
    #[error("Dropped label: {message}")]
    DroppedLabel {
        /// Description of the dropped label.
        message: String,
    },
}

impl TimecodeError {
    /// Create an unsupported frame rate error.
    pub fn unsupported_frame_rate(rate: impl ToString) -> Self {
        Self::UnsupportedFrameRate {
            rate: rate.to_string(),
        }
    }

    /// Create an invalid component error.
    pub fn invalid_component(component: impl Into<String>, value: u64, max: u64) -> Self {
        Self::InvalidComponent {
            component: component.into(),
            value,
            max,
        }
    }

    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create a dropped label error.
    pub fn dropped_label(message: impl Into<String>) -> Self {
        Self::DroppedLabel {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimecodeError::unsupported_frame_rate(48.0);
        assert_eq!(err.to_string(), "Unsupported frame rate: 48");

        let err = TimecodeError::invalid_component("minutes", 75, 59);
        assert_eq!(
            err.to_string(),
            "Invalid timecode component: minutes = 75 (max 59)"
        );

        let err = TimecodeError::invalid_format("missing separator");
        assert_eq!(err.to_string(), "Invalid timecode format: missing separator");
    }

    #[test]
    fn test_error_serialization() {
        let err = TimecodeError::invalid_component("frames", 30, 29);
        let json = serde_json::to_string(&err).unwrap();
        let decoded: TimecodeError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, decoded);
    }
}
