//! API error types.

use farmgate_commerce::checkout::GatewayError;
use farmgate_data::FetchError;
use thiserror::Error;

/// Errors surfaced by the typed backend services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Human-readable message extracted from the response body.
        message: String,
    },

    /// The response arrived but could not be understood.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::HttpError { status, message } => ApiError::Rejected { status, message },
            FetchError::ParseError(message) | FetchError::JsonError(message) => {
                ApiError::Decode(message)
            }
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<ApiError> for GatewayError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Network(message) => GatewayError::Network(message),
            ApiError::Rejected { status, message } => GatewayError::Rejected { status, message },
            // A garbled response body is indistinguishable from a broken
            // connection as far as the checkout screen is concerned.
            ApiError::Decode(message) => GatewayError::Network(message),
        }
    }
}
