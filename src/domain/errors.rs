//! Domain error taxonomy.
//!
//! Every failure is raised where it is detected (value object constructors,
//! the entity factory, the query handler) and travels up unchanged.

use crate::domain::entities::UserId;

/// Maximum length of a user name, counted in characters after trimming.
pub const MAX_NAME_LENGTH: usize = 255;

/// Validation and lookup failures raised by the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The raw string is not a canonical UUID.
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),

    /// The raw string is not a well-formed email address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("User name cannot be empty")]
    EmptyName,

    #[error("User name cannot exceed {max} characters")]
    NameTooLong { max: usize },

    /// No record exists for a syntactically valid id.
    #[error("User not found with ID: {0}")]
    UserNotFound(UserId),
}

/// Failures reported by a storage adapter behind the repository port.
///
/// Kept apart from [`DomainError`] so a missing row (`Ok(None)`) is never
/// confused with a broken store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A stored row no longer satisfies the domain invariants.
    #[error("Corrupt record {id}: {reason}")]
    CorruptRecord { id: String, reason: String },
}
