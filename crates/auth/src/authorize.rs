use thiserror::Error;

use crate::Role;
use crate::roles::{is_admin, is_user};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{required}' required")]
    Forbidden { required: Role },
}

/// Check that `role` grants `required`.
///
/// Exact role match only: an admin does not implicitly pass a `user` check,
/// and `is_superuser` on the user record is never consulted.
///
/// - No IO
/// - No panics
pub fn authorize(role: &str, required: Role) -> Result<(), AuthzError> {
    let granted = match required {
        Role::Admin => is_admin(role),
        Role::User => is_user(role),
    };

    if granted {
        Ok(())
    } else {
        tracing::debug!(role, required = %required, "authorization denied");
        Err(AuthzError::Forbidden { required })
    }
}

pub fn require_admin(role: &str) -> Result<(), AuthzError> {
    authorize(role, Role::Admin)
}

pub fn require_user(role: &str) -> Result<(), AuthzError> {
    authorize(role, Role::User)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_passes_admin_gate_only() {
        assert_eq!(require_admin("admin"), Ok(()));
        assert_eq!(
            require_user("admin"),
            Err(AuthzError::Forbidden { required: Role::User })
        );
    }

    #[test]
    fn unknown_roles_are_forbidden_everywhere() {
        for role in ["editor", "viewer", "", "Admin"] {
            assert!(require_admin(role).is_err());
            assert!(require_user(role).is_err());
        }
    }

    #[test]
    fn error_names_required_role() {
        let err = require_admin("user").unwrap_err();
        assert_eq!(err.to_string(), "forbidden: role 'admin' required");
    }
}
