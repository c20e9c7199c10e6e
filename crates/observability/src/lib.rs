//! Process-wide tracing setup shared by binaries and integration harnesses
//! that embed the auth and content crates.

/// Tracing configuration (filters, formatting).
pub mod tracing;

pub use crate::tracing::{LogFormat, init, init_with};
