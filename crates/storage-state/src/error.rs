//! Error types for key/value persistence.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by a key/value store or a codec
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read key '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write key '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl StorageError {
    /// Errors caused by the stored bytes rather than by the store itself
    pub fn is_content_error(&self) -> bool {
        matches!(self, StorageError::Deserialization(_) | StorageError::InvalidDocument(_))
    }
}
