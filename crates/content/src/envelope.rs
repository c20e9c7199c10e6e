//! Generic success/failure envelope returned by API endpoints.
//!
//! The wire shape leaves `success`, `data` and `error` independent, so
//! contradictory envelopes deserialize fine. [`ApiResponse::validate`] is the
//! check for that; [`ApiResponse::ok`] and [`ApiResponse::fail`] cannot build
//! one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use giantytalk_core::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The envelope contradicts itself.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// A well-formed failure envelope.
    #[error("request failed: {0}")]
    Failed(String),
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Reject envelopes that claim success with an error, or failure with data.
    pub fn validate(&self) -> DomainResult<()> {
        if self.success && self.error.is_some() {
            return Err(DomainError::invariant("successful response carries an error"));
        }
        if !self.success && self.data.is_some() {
            return Err(DomainError::invariant("failed response carries data"));
        }
        Ok(())
    }

    /// Validate, then split into payload or failure.
    ///
    /// A failure's text is `error`, else `message`, else a generic fallback.
    pub fn into_result(self) -> Result<Option<T>, EnvelopeError> {
        self.validate()?;
        if self.success {
            return Ok(self.data);
        }

        let reason = self
            .error
            .or(self.message)
            .unwrap_or_else(|| "Request failed".to_string());
        tracing::debug!(reason = %reason, "api response reported failure");
        Err(EnvelopeError::Failed(reason))
    }
}
