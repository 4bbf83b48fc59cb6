//! Response envelope shared by the backend endpoints.
//!
//! Success bodies look like `{ success, data, meta? }`; failure bodies carry
//! either a `message` string or an `errors` map of field names to message
//! lists. Everything a user sees funnels through [`extract_error_message`].

use crate::ApiError;
use farmgate_data::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Message shown when a failure body carries nothing usable.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Standard envelope around a single resource.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Whether the backend reports the call as successful.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// The resource itself.
    #[serde(default)]
    pub data: Option<T>,
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    /// Page the response covers (1-indexed).
    #[serde(default)]
    pub current_page: u32,
    /// Page size.
    #[serde(default)]
    pub per_page: u32,
    /// Total records across all pages.
    #[serde(default)]
    pub total: u64,
}

/// Envelope around a paginated list.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// Unwrap a single-resource response into its payload.
///
/// Non-2xx statuses and `success: false` bodies become
/// [`ApiError::Rejected`] with the best message the body offers.
pub(crate) fn unwrap_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Rejected {
            status: response.status,
            message: extract_error_message(&response),
        });
    }
    let status = response.status;
    let envelope: ApiEnvelope<T> = response
        .json()
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected {
            status,
            message: envelope
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
        });
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response carried no data".to_string()))
}

/// Unwrap a list response into its items and pagination block.
pub(crate) fn unwrap_list<T: DeserializeOwned>(
    response: Response,
) -> Result<(Vec<T>, Option<PageMeta>), ApiError> {
    if !response.is_success() {
        return Err(ApiError::Rejected {
            status: response.status,
            message: extract_error_message(&response),
        });
    }
    let status = response.status;
    let envelope: ListEnvelope<T> = response
        .json()
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected {
            status,
            message: envelope
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
        });
    }
    Ok((envelope.data, envelope.meta))
}

/// Distill a failure body into one human-readable message.
///
/// Prefers the structured `message` field, then flattens field-level
/// `errors` lists, then gives up with the generic message.
pub fn extract_error_message(response: &Response) -> String {
    let Ok(body) = response.json::<serde_json::Value>() else {
        return GENERIC_ERROR_MESSAGE.to_string();
    };

    if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
        if !message.is_empty() {
            return message.to_string();
        }
    }

    if let Some(errors) = body.get("errors").and_then(|e| e.as_object()) {
        let mut messages = Vec::new();
        for field_errors in errors.values() {
            match field_errors {
                serde_json::Value::Array(list) => {
                    messages.extend(list.iter().filter_map(|m| m.as_str().map(String::from)));
                }
                serde_json::Value::String(message) => messages.push(message.clone()),
                _ => {}
            }
        }
        if !messages.is_empty() {
            return messages.join("; ");
        }
    }

    GENERIC_ERROR_MESSAGE.to_string()
}
