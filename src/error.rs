//! Error types for the student record manager
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for record operations
#[derive(Error, Debug)]
pub enum RecordsError {
    /// Input rejected at the prompt boundary (empty field, non-numeric age)
    #[error("{message}")]
    Validation { message: String },

    /// A record with the same id is already in the collection
    #[error("ID already exists: {id}")]
    DuplicateId { id: String },

    /// No record matches the requested id
    #[error("Student not found: {id}")]
    NotFound { id: String },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be serialized
    #[error("Failed to encode students for {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl RecordsError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new duplicate id error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Create a new not-found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new encoding error
    pub fn encode<P: Into<PathBuf>>(path: P, source: serde_json::Error) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RecordsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_system_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = RecordsError::file_system("write", "students.json", io);

        assert_eq!(err.to_string(), "File system error: write failed on students.json");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validation_message_is_displayed_verbatim() {
        let err = RecordsError::validation("Age must be a number!");
        assert_eq!(err.to_string(), "Age must be a number!");
    }
}
