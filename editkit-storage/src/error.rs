//! Error types for storage estimation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur resolving codec and resolution selectors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageError {
    /// A codec selector outside the bitrate table.
    #[error("Unknown codec: {selector}")]
    UnknownCodec {
        /// The rejected selector string.
        selector: String,
    },

    /// A resolution selector outside the bitrate table.
    #[error("Unknown resolution: {selector}")]
    UnknownResolution {
        /// The rejected selector string.
        selector: String,
    },
}

impl StorageError {
    /// Create an unknown codec error.
    pub fn unknown_codec(selector: impl Into<String>) -> Self {
        Self::UnknownCodec {
            selector: selector.into(),
        }
    }

    /// Create an unknown resolution error.
    pub fn unknown_resolution(selector: impl Into<String>) -> Self {
        Self::UnknownResolution {
            selector: selector.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::unknown_codec("prores-4444");
        assert_eq!(err.to_string(), "Unknown codec: prores-4444");

        let err = StorageError::unknown_resolution("640x480");
        assert_eq!(err.to_string(), "Unknown resolution: 640x480");
    }
}
