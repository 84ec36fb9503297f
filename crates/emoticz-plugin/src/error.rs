//! Plugin error types.

use std::path::PathBuf;

use emoticz_commit::AnswerError;
use thiserror::Error;

/// A required answer was empty after normalization.
///
/// Hosts are expected to show the message and ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a validation error with the given human-readable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Plugin-related errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// A packaged resource does not exist.
    #[error("resource not found: {0}")]
    ResourceNotFound(PathBuf),

    /// A packaged resource exists but could not be read.
    #[error("failed to read resource {path}: {source}")]
    ResourceRead {
        /// The resource path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// An answer failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The collected answers could not be assembled.
    #[error("invalid answers: {0}")]
    Answers(#[from] AnswerError),

    /// Configuration error.
    #[error("plugin configuration error: {0}")]
    ConfigError(String),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

#[cfg(test)]
mod tests {
    use super::*;
    use emoticz_commit::AnswerField;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("scope is required");
        assert_eq!(err.to_string(), "scope is required");
        assert_eq!(err.message(), "scope is required");
    }

    #[test]
    fn test_resource_not_found_display() {
        let err = PluginError::ResourceNotFound(PathBuf::from("/missing/info.txt"));
        assert_eq!(err.to_string(), "resource not found: /missing/info.txt");
    }

    #[test]
    fn test_resource_read_display() {
        let err = PluginError::ResourceRead {
            path: PathBuf::from("info.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read resource info.txt: denied");
    }

    #[test]
    fn test_validation_display() {
        let err: PluginError = ValidationError::new("subject is required").into();
        assert_eq!(err.to_string(), "validation failed: subject is required");
    }

    #[test]
    fn test_answers_display() {
        let err: PluginError = AnswerError::Missing(AnswerField::Scope).into();
        assert_eq!(err.to_string(), "invalid answers: missing answer: scope");
    }

    #[test]
    fn test_config_error_display() {
        let err = PluginError::ConfigError("invalid value".to_string());
        assert_eq!(err.to_string(), "plugin configuration error: invalid value");
    }

    #[test]
    fn test_error_is_debug() {
        let err = PluginError::ResourceNotFound(PathBuf::from("x"));
        let debug = format!("{err:?}");
        assert!(debug.contains("ResourceNotFound"));
    }

    #[test]
    fn test_plugin_result_err() {
        let result: PluginResult<i32> = Err(PluginError::ConfigError("test".to_string()));
        assert!(result.is_err());
    }
}
