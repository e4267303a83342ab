//! User aggregate and repository trait.
//!
//! Maps to the `users` table in the database schema.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, RepositoryError, MAX_NAME_LENGTH};
use crate::domain::value_objects::{Email, Identifier};

/// Identifier of a [`User`].
///
/// A distinct type around [`Identifier`], so ids of other aggregates can't be
/// passed where a user id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Identifier);

impl UserId {
    /// Parse a canonical UUID string.
    pub fn from_string(raw: &str) -> Result<Self, DomainError> {
        Identifier::from_string(raw).map(Self)
    }

    /// Generate a fresh random v4 user id.
    pub fn generate() -> Self {
        Self(Identifier::generate())
    }

    pub fn identifier(&self) -> &Identifier {
        &self.0
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        self.0.as_uuid()
    }

    /// Canonical lowercase string, used as the storage key.
    pub fn value(&self) -> String {
        self.0.value()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl From<Identifier> for UserId {
    fn from(id: Identifier) -> Self {
        Self(id)
    }
}

/// Represents a user account.
///
/// Maps to the `users` table:
/// - id: UUID PRIMARY KEY
/// - name: VARCHAR(255) NOT NULL
/// - email: TEXT NOT NULL
///
/// Fields are private and there are no setters. A changed user is a new
/// value with the same id, handed back to [`UserRepository::save`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
}

impl User {
    /// Build a user from an already-validated id and email plus a raw name.
    ///
    /// The name is trimmed before it is checked.
    ///
    /// # Errors
    ///
    /// - [`DomainError::EmptyName`] if nothing is left after trimming
    /// - [`DomainError::NameTooLong`] if more than 255 characters are left
    pub fn create(id: UserId, name: &str, email: Email) -> Result<Self, DomainError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }

        Ok(Self {
            id,
            name: name.to_owned(),
            email,
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// Repository trait for User persistence.
///
/// Defined in the domain layer so the application depends on this contract
/// only; backends live in the infrastructure layer and are picked at startup.
///
/// Implementations must make each call atomic with respect to its key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or replace the record stored under `user.id()`.
    ///
    /// Saving the same id twice keeps a single record holding the latest
    /// values.
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;

    /// Fetch the current record for `id`, or `None` when there is none.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
}
