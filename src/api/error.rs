//! API Error Types
//!
//! The three ways a backend call can fail, independent of which HTTP stack
//! made the call.

use thiserror::Error;

/// Errors returned by [`super::ActivitiesApi`] implementations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, timeout, ...)
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-success status with a JSON body
    #[error("Request rejected ({status}): {}", rejection_text(.detail, .payload))]
    Rejected {
        status: u16,
        /// `detail` field of the body, when present and truthy
        detail: Option<String>,
        /// Raw response body
        payload: String,
    },

    /// Body could not be decoded as the expected structure
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    ///
    /// Any JSON body counts as a structured rejection; `detail` is taken when
    /// it is a non-empty string, and other non-null values are rendered as
    /// JSON. A body that is not JSON at all is reported as malformed.
    pub fn from_rejection(status: u16, body: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => {
                let detail = match value.get("detail") {
                    Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
                    Some(serde_json::Value::String(_)) | Some(serde_json::Value::Null) | None => {
                        None
                    }
                    Some(other) => Some(other.to_string()),
                };
                ApiError::Rejected {
                    status,
                    detail,
                    payload: body.to_string(),
                }
            }
            Err(e) => ApiError::Malformed(format!("status {}: {} ({})", status, body, e)),
        }
    }

    /// Decode error for a success body
    pub fn malformed(err: impl std::fmt::Display) -> Self {
        ApiError::Malformed(err.to_string())
    }

    /// Server-provided detail, if this is a structured rejection carrying one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

fn rejection_text<'a>(detail: &'a Option<String>, payload: &'a str) -> &'a str {
    detail.as_deref().unwrap_or(payload)
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
