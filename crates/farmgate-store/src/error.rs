//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using client-side storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read a record.
    #[error("Storage read failed: {0}")]
    ReadError(String),

    /// Failed to write a record.
    #[error("Storage write failed: {0}")]
    WriteError(String),

    /// Failed to serialize or deserialize a record.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}
