use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::roles;

/// Access-token payload as delivered to the OAuth callback.
///
/// Only the claims the client reads are modeled; anything else in the payload
/// is ignored. Decoding does **not** verify the signature, the API does that
/// on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user id, emitted as a string or a number.
    #[serde(deserialize_with = "string_or_number")]
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Expiry, seconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued-at, seconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl TokenClaims {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref().is_some_and(roles::is_admin)
    }

    pub fn is_user(&self) -> bool {
        self.role.as_deref().is_some_and(roles::is_user)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|s| DateTime::from_timestamp(s, 0))
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|s| DateTime::from_timestamp(s, 0))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token: expected three dot-separated segments")]
    Malformed,

    #[error("token payload is not valid base64url: {0}")]
    Encoding(String),

    #[error("token payload is not valid claims JSON: {0}")]
    Payload(String),

    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Read the claims out of a JWT without checking its signature.
pub fn decode_unverified(token: &str) -> Result<TokenClaims, TokenError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(TokenError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))
}

/// Deterministically validate the claim time window.
///
/// Missing `exp`/`iat` claims are not checked.
pub fn validate_claims(claims: &TokenClaims, now: DateTime<Utc>) -> Result<(), TokenError> {
    let issued_at = claims.issued_at();
    let expires_at = claims.expires_at();

    if let (Some(iat), Some(exp)) = (issued_at, expires_at) {
        if exp <= iat {
            return Err(TokenError::InvalidTimeWindow);
        }
    }
    if issued_at.is_some_and(|iat| now < iat) {
        return Err(TokenError::NotYetValid);
    }
    if expires_at.is_some_and(|exp| now >= exp) {
        return Err(TokenError::Expired);
    }
    Ok(())
}

/// Failure of the OAuth redirect back into the application.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallbackError {
    #[error("oauth provider reported an error: {0}")]
    OAuthFailed(String),

    #[error("no token received")]
    NoToken,

    #[error("token could not be decoded: {0}")]
    InvalidToken(#[source] TokenError),
}

impl CallbackError {
    /// Value of the `error` query parameter on the sign-in redirect.
    pub fn query_code(&self) -> &'static str {
        match self {
            CallbackError::OAuthFailed(_) => "oauth_failed",
            CallbackError::NoToken => "no_token",
            CallbackError::InvalidToken(_) => "invalid_token",
        }
    }
}

/// Process the `token`/`error` query parameters of the OAuth callback.
///
/// A provider error takes precedence over any token that came with it.
pub fn complete_oauth_callback(
    token: Option<&str>,
    error: Option<&str>,
) -> Result<TokenClaims, CallbackError> {
    if let Some(error) = error {
        tracing::warn!(provider_error = error, "oauth callback reported an error");
        return Err(CallbackError::OAuthFailed(error.to_string()));
    }

    let token = token.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
        tracing::warn!("oauth callback carried no token");
        CallbackError::NoToken
    })?;

    decode_unverified(token).map_err(|e| {
        tracing::warn!(error = %e, "oauth callback token could not be decoded");
        CallbackError::InvalidToken(e)
    })
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}
