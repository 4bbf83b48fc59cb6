//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No live session is present.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The stored token has expired.
    #[error("session expired")]
    SessionExpired,

    /// Session storage failed.
    #[error("session storage failed: {0}")]
    Storage(String),
}

impl From<farmgate_store::StorageError> for AuthError {
    fn from(e: farmgate_store::StorageError) -> Self {
        AuthError::Storage(e.to_string())
    }
}
