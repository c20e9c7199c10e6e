//! `giantytalk-auth` — role model and authentication contracts.
//!
//! This crate is intentionally decoupled from HTTP and storage: it defines
//! what the auth service exchanges and how roles gate behavior, and leaves
//! sending requests and persisting cookies to the caller.

pub mod authorize;
pub mod claims;
pub mod config;
pub mod contracts;
pub mod error;
pub mod guard;
pub mod roles;
pub mod session;

pub use authorize::{AuthzError, authorize, require_admin, require_user};
pub use claims::{CallbackError, TokenClaims, TokenError, complete_oauth_callback, decode_unverified, validate_claims};
pub use config::{AuthConfig, ConfigError};
pub use contracts::{AuthResponse, AuthUser, SignInRequest, SignUpRequest};
pub use error::AuthError;
pub use guard::{RouteDecision, RouteGuard};
pub use roles::{Role, is_admin, is_user};
pub use session::Session;
