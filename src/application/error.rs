//! Application error type.

use crate::domain::{DomainError, RepositoryError};

/// Errors surfaced by the command and query handlers.
///
/// Domain failures pass through untouched; storage failures are kept apart
/// so the boundary can tell a client mistake from a broken backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UserError {
    /// Short machine-readable label, used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::InvalidFormat(_)) => "invalid_format",
            Self::Domain(DomainError::InvalidEmail(_)) => "invalid_email",
            Self::Domain(DomainError::EmptyName) => "empty_name",
            Self::Domain(DomainError::NameTooLong { .. }) => "name_too_long",
            Self::Domain(DomainError::UserNotFound(_)) => "user_not_found",
            Self::Repository(_) => "repository",
        }
    }
}
