//! Error types for tarpit API operations.

use std::io;
use thiserror::Error;

/// Result type for tarpit API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while constructing or persisting API state.
///
/// Expected call results (backend rejections, 403, transport trouble) are
/// not errors; they are [`crate::client::ApiOutcome`] variants. This enum
/// covers the faults a caller cannot recover from by retrying the action.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    #[error("{kind} does not support {operation}")]
    UnsupportedOperation {
        kind: &'static str,
        operation: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("credential storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_segment_message() {
        let err = ApiError::InvalidSegment("offset -1".into());
        assert_eq!(err.to_string(), "invalid segment: offset -1");
    }

    #[test]
    fn test_unsupported_operation_message() {
        let err = ApiError::UnsupportedOperation {
            kind: "yara",
            operation: "delete",
        };
        assert_eq!(err.to_string(), "yara does not support delete");
    }
}
