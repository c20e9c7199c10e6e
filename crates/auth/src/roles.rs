//! Closed role model used for authorization gating.
//!
//! The predicates take raw strings on purpose: they are total, never fail,
//! and an unknown value simply matches neither role. Parsing into [`Role`] is
//! the strict path.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use giantytalk_core::DomainError;

/// Wire value of the administrator role.
pub const ADMIN: &str = "admin";

/// Wire value of the regular user role.
pub const USER: &str = "user";

/// Authorization role. Exactly one of two values.
///
/// This is unrelated to the content-domain `ContentRole`
/// (admin/editor/viewer); the two sets are kept apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ADMIN,
            Role::User => USER,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Role::User)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ADMIN => Ok(Role::Admin),
            USER => Ok(Role::User),
            other => Err(DomainError::validation(format!(
                "unknown role '{other}' (expected one of: admin, user)"
            ))),
        }
    }
}

/// True iff `role` is exactly `"admin"` (case-sensitive).
pub fn is_admin(role: &str) -> bool {
    role == ADMIN
}

/// True iff `role` is exactly `"user"` (case-sensitive).
pub fn is_user(role: &str) -> bool {
    role == USER
}
