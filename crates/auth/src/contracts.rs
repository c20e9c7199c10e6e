//! Request/response shapes of the sign-in and sign-up exchanges.
//!
//! These are passive contracts. `serde` enforces required-vs-optional fields
//! at the deserialization boundary and nothing else is validated here; email
//! syntax and password rules belong to the auth service.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use giantytalk_core::{DomainError, DomainResult, ValueObject};

/// Sign-in endpoint path, relative to the API base URL.
pub const SIGN_IN_PATH: &str = "/api/v1/auth/signin";

/// Sign-up endpoint path, relative to the API base URL.
pub const SIGN_UP_PATH: &str = "/api/v1/auth/signup";

/// Current-user endpoint used to refresh a cached user.
pub const ME_PATH: &str = "/api/v1/auth/me";

/// Conventional `token_type` returned by the auth service.
pub const BEARER: &str = "bearer";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl core::fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ValueObject for SignInRequest {}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl SignUpRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Credentials for the sign-in that follows a successful registration.
    pub fn to_sign_in(&self) -> SignInRequest {
        SignInRequest::new(self.email.clone(), self.password.clone())
    }
}

impl core::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .finish()
    }
}

impl ValueObject for SignUpRequest {}

/// User record as returned inside an [`AuthResponse`].
///
/// `is_superuser` is a separate flag from the `admin` [`Role`](crate::Role);
/// nothing here keeps the two in agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub is_active: bool,
    pub is_superuser: bool,
    /// ISO-8601 timestamp, kept verbatim.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub language_preference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl AuthUser {
    pub fn created_at_parsed(&self) -> DomainResult<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn updated_at_parsed(&self) -> DomainResult<Option<DateTime<Utc>>> {
        self.updated_at.as_deref().map(parse_timestamp).transpose()
    }
}

/// Successful response of both sign-in and sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: AuthUser,
}

impl AuthResponse {
    /// Whether `token_type` is the conventional bearer type. Informational only.
    pub fn is_bearer(&self) -> bool {
        self.token_type.eq_ignore_ascii_case(BEARER)
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Offset-less values (the back-end emits naive datetimes) are read as UTC.
fn parse_timestamp(raw: &str) -> DomainResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| DomainError::validation(format!("invalid timestamp '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_user() -> AuthUser {
        AuthUser {
            id: 7,
            email: "linh@example.com".to_string(),
            username: "linh".to_string(),
            full_name: "Linh Tran".to_string(),
            is_active: true,
            is_superuser: false,
            created_at: "2024-03-01T08:30:00Z".to_string(),
            updated_at: Some("2024-03-02T09:00:00.123456".to_string()),
            avatar_url: Some("https://cdn.example.com/a.png".to_string()),
            language_preference: "vi".to_string(),
            timezone: Some("Asia/Ho_Chi_Minh".to_string()),
        }
    }

    #[test]
    fn sign_up_without_full_name_is_valid() {
        let req: SignUpRequest =
            serde_json::from_value(json!({ "email": "a@b.co", "password": "pw" })).unwrap();
        assert_eq!(req.full_name, None);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "email": "a@b.co", "password": "pw" })
        );
    }

    #[test]
    fn sign_in_requires_both_fields() {
        assert!(serde_json::from_value::<SignInRequest>(json!({ "email": "a@b.co" })).is_err());
    }

    #[test]
    fn auth_user_missing_required_field_is_rejected() {
        let complete = serde_json::to_value(full_user()).unwrap();
        let required = [
            "id",
            "email",
            "username",
            "full_name",
            "is_active",
            "is_superuser",
            "created_at",
            "language_preference",
        ];

        for field in required {
            let mut user = complete.clone();
            user.as_object_mut().unwrap().remove(field);
            let body = json!({ "access_token": "tok", "token_type": "bearer", "user": user });
            assert!(
                serde_json::from_value::<AuthResponse>(body).is_err(),
                "user without '{field}' must be rejected"
            );
        }

        for field in ["updated_at", "avatar_url", "timezone"] {
            let mut user = complete.clone();
            user.as_object_mut().unwrap().remove(field);
            assert!(serde_json::from_value::<AuthUser>(user).is_ok(), "'{field}' is optional");
        }
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", SignUpRequest::new("a@b.co", "hunter2").with_full_name("A"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("a@b.co"));
        assert!(!format!("{:?}", SignInRequest::new("a@b.co", "hunter2")).contains("hunter2"));
    }

    #[test]
    fn sign_up_converts_to_sign_in() {
        let req = SignUpRequest::new("a@b.co", "pw").with_full_name("A B");
        assert_eq!(req.to_sign_in(), SignInRequest::new("a@b.co", "pw"));
    }

    #[test]
    fn auth_response_round_trips_with_optionals_present() {
        let resp = AuthResponse {
            access_token: "tok".to_string(),
            token_type: "bearer".to_string(),
            user: full_user(),
        };
        let text = serde_json::to_string(&resp).unwrap();
        let back: AuthResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(back, resp);
        assert!(back.is_bearer());
    }

    #[test]
    fn auth_response_round_trips_with_optionals_absent() {
        let mut user = full_user();
        user.updated_at = None;
        user.avatar_url = None;
        user.timezone = None;
        let resp = AuthResponse {
            access_token: "tok".to_string(),
            token_type: "Bearer".to_string(),
            user,
        };

        let value = serde_json::to_value(&resp).unwrap();
        let user_obj = value["user"].as_object().unwrap();
        assert!(!user_obj.contains_key("updated_at"));
        assert!(!user_obj.contains_key("avatar_url"));
        assert!(!user_obj.contains_key("timezone"));

        let back: AuthResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back, resp);
        assert!(back.is_bearer());
    }

    #[test]
    fn auth_response_without_user_is_rejected() {
        let body = json!({ "access_token": "tok", "token_type": "bearer" });
        assert!(serde_json::from_value::<AuthResponse>(body).is_err());
    }

    #[test]
    fn timestamps_parse_with_and_without_offset() {
        let user = full_user();
        assert_eq!(user.created_at_parsed().unwrap().to_rfc3339(), "2024-03-01T08:30:00+00:00");
        let updated = user.updated_at_parsed().unwrap().unwrap();
        assert_eq!(updated.timestamp(), 1_709_370_000);

        let mut broken = full_user();
        broken.created_at = "yesterday".to_string();
        assert!(matches!(broken.created_at_parsed(), Err(DomainError::Validation(_))));
    }
}
