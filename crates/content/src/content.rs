use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use giantytalk_core::{ContentId, ContentUserId, DomainError, Entity};

use crate::user::ContentUser;

/// Kind of a content record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Message,
    Response,
    Template,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Message, ContentType::Response, ContentType::Template];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Message => "message",
            ContentType::Response => "response",
            ContentType::Template => "template",
        }
    }
}

impl core::fmt::Display for ContentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown content type '{s}' (expected one of: message, response, template)"
                ))
            })
    }
}

/// A piece of authored content. Owned by exactly one [`ContentUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: ContentId,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub author_id: ContentUserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    pub fn is_authored_by(&self, user: &ContentUser) -> bool {
        self.author_id == user.id
    }
}

impl Entity for Content {
    type Id = ContentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
