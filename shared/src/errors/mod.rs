//! Error response structure shared by every HTTP endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard error response body.
///
/// `error` is a machine-stable code from [`error_codes`]; `message` is a short
/// human-readable sentence that never carries secrets or internal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Error codes returned to clients
pub mod error_codes {
    pub const MISSING_USER_ID: &str = "missing_user_id";
    pub const INVALID_USER_ID: &str = "invalid_user_id";
    pub const INVALID_REQUEST: &str = "invalid_request";
    pub const INVALID_ACCESS_TOKEN: &str = "invalid_access_token";
    pub const INVALID_REFRESH_TOKEN: &str = "invalid_refresh_token";
    pub const INTERNAL_ERROR: &str = "internal_error";
    pub const NOT_FOUND: &str = "not_found";
}
