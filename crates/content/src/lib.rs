//! `giantytalk-content` — content-domain records and the generic API envelope.

pub mod content;
pub mod envelope;
pub mod user;

pub use content::{Content, ContentType};
pub use envelope::{ApiResponse, EnvelopeError};
pub use user::{ContentRole, ContentUser};
