//! `giantytalk-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no transport, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod locale;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ContentId, ContentUserId};
pub use locale::Locale;
pub use value_object::ValueObject;
