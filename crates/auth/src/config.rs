//! Environment-driven configuration for the auth boundary.

use chrono::Duration;
use thiserror::Error;

use giantytalk_core::Locale;

pub const ENV_API_URL: &str = "GIANTYTALK_API_URL";
pub const ENV_SESSION_TTL_DAYS: &str = "GIANTYTALK_SESSION_TTL_DAYS";
pub const ENV_DEFAULT_LOCALE: &str = "GIANTYTALK_DEFAULT_LOCALE";

pub const DEFAULT_API_URL: &str = "https://api-GiantyLive.sgcharo.com";
pub const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive number of days, got '{value}'")]
    InvalidTtl { var: &'static str, value: String },

    #[error("{var} must be one of vi, en, ja, got '{value}'")]
    InvalidLocale { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// API base URL, without a trailing slash.
    pub api_base_url: String,
    /// Lifetime of an established session (the auth cookies).
    pub session_ttl: Duration,
    pub default_locale: Locale,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            session_ttl: Duration::days(DEFAULT_SESSION_TTL_DAYS),
            default_locale: Locale::default(),
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// Unset or blank keys fall back to defaults; set but malformed keys are
    /// errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_base_url = match get(ENV_API_URL) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(url) => {
                return Err(ConfigError::InvalidUrl {
                    var: ENV_API_URL,
                    value: url,
                });
            }
            None => {
                tracing::warn!("{ENV_API_URL} not set; using {DEFAULT_API_URL}");
                defaults.api_base_url
            }
        };

        let session_ttl = match get(ENV_SESSION_TTL_DAYS) {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .and_then(Duration::try_days)
                .ok_or(ConfigError::InvalidTtl {
                    var: ENV_SESSION_TTL_DAYS,
                    value: raw,
                })?,
            None => defaults.session_ttl,
        };

        let default_locale = match get(ENV_DEFAULT_LOCALE) {
            Some(raw) => Locale::from_tag(&raw).ok_or(ConfigError::InvalidLocale {
                var: ENV_DEFAULT_LOCALE,
                value: raw,
            })?,
            None => defaults.default_locale,
        };

        Ok(Self {
            api_base_url,
            session_ttl,
            default_locale,
        })
    }

    /// Absolute URL of an API endpoint path such as `/api/v1/auth/signin`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::contracts::SIGN_IN_PATH;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AuthConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AuthConfig::default());
        assert_eq!(cfg.session_ttl, Duration::days(7));
        assert_eq!(cfg.default_locale, Locale::En);
    }

    #[test]
    fn reads_overrides() {
        let cfg = AuthConfig::from_lookup(lookup(&[
            (ENV_API_URL, "http://localhost:8000/"),
            (ENV_SESSION_TTL_DAYS, "1"),
            (ENV_DEFAULT_LOCALE, "ja"),
        ]))
        .unwrap();

        assert_eq!(cfg.api_base_url, "http://localhost:8000");
        assert_eq!(cfg.session_ttl, Duration::days(1));
        assert_eq!(cfg.default_locale, Locale::Ja);
        assert_eq!(cfg.endpoint(SIGN_IN_PATH), "http://localhost:8000/api/v1/auth/signin");
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = AuthConfig::from_lookup(lookup(&[(ENV_DEFAULT_LOCALE, "  ")])).unwrap();
        assert_eq!(cfg.default_locale, Locale::En);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = AuthConfig::from_lookup(lookup(&[(ENV_SESSION_TTL_DAYS, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTtl { .. }));

        let err = AuthConfig::from_lookup(lookup(&[(ENV_DEFAULT_LOCALE, "fr")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "GIANTYTALK_DEFAULT_LOCALE must be one of vi, en, ja, got 'fr'"
        );

        let err = AuthConfig::from_lookup(lookup(&[(ENV_API_URL, "ftp://x")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }
}
