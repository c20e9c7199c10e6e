//! Error shape surfaced to callers of the sign-in/sign-up exchanges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Any failure of an auth exchange, collapsed into one shape.
///
/// Callers that need to tell "wrong password" from "service down" can only
/// look at `status_code`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
    #[serde(rename = "statusCode", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Build an error from a failed response body.
    ///
    /// The message comes from `detail` (the back-end's field), then
    /// `message`, then `fallback`. Non-string or empty values are skipped.
    pub fn from_response_body(status: Option<u16>, body: &serde_json::Value, fallback: &str) -> Self {
        let message = ["detail", "message"]
            .iter()
            .filter_map(|key| body.get(key).and_then(serde_json::Value::as_str))
            .find(|s| !s.is_empty())
            .unwrap_or(fallback);

        Self {
            message: message.to_string(),
            status_code: status,
        }
    }

    /// The error raised when a request is answered with 401.
    pub fn expired() -> Self {
        Self::new("Authentication expired").with_status(401)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code == Some(401)
    }
}

/// Fallback messages used when a failed response carries no text.
pub mod fallback {
    pub const SIGN_IN: &str = "Sign in failed";
    pub const SIGN_UP: &str = "Sign up failed";
    pub const LOGIN: &str = "Login failed";
    pub const REGISTRATION: &str = "Registration failed";
    pub const REQUEST: &str = "Request failed";
}
