//! Error types for editor sessions

use thiserror::Error;

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

/// Error types for editor operations
#[derive(Debug, Error)]
pub enum EditorError {
    /// A transform could not produce output; the buffer is left untouched
    #[error("Transform '{action}' failed: {message}")]
    Transform { action: String, message: String },

    /// The insert-image panel holds no usable URL
    #[error("Invalid image URL: {0:?}")]
    InvalidImageUrl(String),
}

impl EditorError {
    /// Check if the error came from a transform rather than from user input
    #[must_use]
    pub fn is_transform_failure(&self) -> bool {
        matches!(self, EditorError::Transform { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_failure_predicate() {
        let err = EditorError::Transform {
            action: "Center images".to_string(),
            message: "serialization failed".to_string(),
        };
        assert!(err.is_transform_failure());
        assert_eq!(err.to_string(), "Transform 'Center images' failed: serialization failed");
        assert!(!EditorError::InvalidImageUrl(String::new()).is_transform_failure());
    }
}
