use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use giantytalk_core::{ContentUserId, DomainError, Entity};

/// Content-domain role.
///
/// A separate closed set from the two-value auth `Role`: `editor` and
/// `viewer` exist only here, and no mapping between the two is defined.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    Admin,
    Editor,
    Viewer,
}

impl ContentRole {
    pub const ALL: [ContentRole; 3] = [ContentRole::Admin, ContentRole::Editor, ContentRole::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRole::Admin => "admin",
            ContentRole::Editor => "editor",
            ContentRole::Viewer => "viewer",
        }
    }
}

impl core::fmt::Display for ContentRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown content role '{s}' (expected one of: admin, editor, viewer)"
                ))
            })
    }
}

/// User record of the content domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUser {
    pub id: ContentUserId,
    pub name: String,
    pub email: String,
    pub role: ContentRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for ContentUser {
    type Id = ContentUserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
