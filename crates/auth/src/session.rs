//! Client-held session state: bearer token, cached user and UI locale.
//!
//! Holds what the web client keeps in its `access_token`, `user` and
//! `NEXT_LOCALE` cookies. Persisting those values is the caller's job; this
//! type only decides what they mean.

use chrono::{DateTime, Duration, Utc};

use giantytalk_core::Locale;

use crate::claims::TokenClaims;
use crate::contracts::{AuthResponse, AuthUser};
use crate::error::AuthError;

/// Cookie names used by the web client.
pub mod cookie {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const USER: &str = "user";
    pub const LOCALE: &str = "NEXT_LOCALE";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
    user: Option<AuthUser>,
    locale: Option<Locale>,
    expires_at: Option<DateTime<Utc>>,
    callback_claims: Option<TokenClaims>,
}

impl Session {
    /// An empty, signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the result of a successful sign-in or sign-up.
    ///
    /// The user's `language_preference` becomes the session locale when it is
    /// a supported tag.
    pub fn establish(response: &AuthResponse, now: DateTime<Utc>, ttl: Duration) -> Self {
        let locale = Locale::from_tag(&response.user.language_preference);
        tracing::debug!(
            user_id = response.user.id,
            locale = locale.map(|l| l.as_str()),
            "session established"
        );

        Self {
            access_token: non_empty(&response.access_token),
            user: Some(response.user.clone()),
            locale,
            expires_at: now.checked_add_signed(ttl),
            callback_claims: None,
        }
    }

    /// Store a token received through the OAuth callback.
    ///
    /// The callback only yields claims, not a full user record. The claims are
    /// kept so callers can gate on the role claim until
    /// [`Session::refresh_user`] supplies the user.
    pub fn establish_from_callback(
        token: &str,
        claims: TokenClaims,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        tracing::debug!(sub = %claims.sub, "session established from oauth callback");
        Self {
            access_token: non_empty(token),
            user: None,
            locale: None,
            expires_at: now.checked_add_signed(ttl),
            callback_claims: Some(claims),
        }
    }

    /// Rebuild a session from stored cookie values.
    ///
    /// A user value that is the literal `undefined` or not valid JSON is
    /// dropped rather than failing the restore. Restored sessions carry no
    /// expiry; the cookie store already enforced it.
    pub fn restore(token: Option<&str>, user_cookie: Option<&str>, locale_cookie: Option<&str>) -> Self {
        let user = user_cookie
            .filter(|raw| !raw.is_empty() && *raw != "undefined")
            .and_then(|raw| match serde_json::from_str::<AuthUser>(raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "dropping corrupted user cookie");
                    None
                }
            });

        Self {
            access_token: token.and_then(non_empty),
            user,
            locale: locale_cookie.and_then(Locale::from_tag),
            expires_at: None,
            callback_claims: None,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Claims decoded by the OAuth callback, if the session came from one.
    pub fn callback_claims(&self) -> Option<&TokenClaims> {
        self.callback_claims.as_ref()
    }

    /// A token is present and has not outlived the session lifetime.
    ///
    /// This is the check request routing relies on; it does not require a
    /// cached user.
    pub fn is_authenticated(&self, now: DateTime<Utc>) -> bool {
        self.access_token.is_some() && self.expires_at.is_none_or(|exp| now < exp)
    }

    /// Token and cached user are both present, as the client requires
    /// before treating a restored session as signed in.
    pub fn has_user(&self) -> bool {
        self.access_token.is_some() && self.user.is_some()
    }

    /// `Authorization` header value for authenticated requests.
    pub fn bearer_header(&self) -> Option<String> {
        self.access_token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Replace the cached user with fresh data from the API.
    pub fn refresh_user(&mut self, user: AuthUser) {
        if let Some(locale) = Locale::from_tag(&user.language_preference) {
            self.locale = Some(locale);
        }
        self.user = Some(user);
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale);
    }

    /// Serialized form of the cached user, as stored in the user cookie.
    pub fn user_cookie_value(&self) -> Result<Option<String>, serde_json::Error> {
        self.user.as_ref().map(serde_json::to_string).transpose()
    }

    /// Sign out: forget token, user, locale and expiry.
    pub fn clear(&mut self) {
        tracing::debug!("session cleared");
        *self = Self::default();
    }

    /// Handle a 401 from the API: the session is no longer valid.
    pub fn handle_unauthorized(&mut self) -> AuthError {
        self.clear();
        AuthError::expired()
    }
}

fn non_empty(token: &str) -> Option<String> {
    Some(token).filter(|t| !t.is_empty()).map(str::to_string)
}
