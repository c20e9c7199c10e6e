//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Request/response contracts are value objects: two sign-in requests with
/// the same email and password are interchangeable. Compare this with
/// [`Entity`](crate::Entity), where a content record keeps its identity even
/// when its title changes.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
