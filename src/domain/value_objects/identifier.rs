//! UUID identifier value object.
//!
//! Identifiers are only accepted in the canonical hyphenated form:
//!
//! ```text
//! xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
//!    8      4    4    4       12        (hex digits, any case on input)
//! ```
//!
//! The stored and rendered form is always lowercase, so two identifiers are
//! equal exactly when their canonical strings match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

use crate::domain::errors::DomainError;

/// Length of the canonical hyphenated form.
pub const CANONICAL_LENGTH: usize = 36;

/// A validated UUID in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(Uuid);

impl Identifier {
    /// Parse a canonical UUID string, ignoring letter case.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidFormat`] for anything other than the
    /// 36-character hyphenated form, including the braced, URN, and
    /// unhyphenated spellings.
    pub fn from_string(raw: &str) -> Result<Self, DomainError> {
        parse_canonical(raw)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidFormat(raw.to_owned()))
    }

    /// Generate a random version 4 identifier.
    ///
    /// Sixteen bytes come from the thread-local CSPRNG; the builder forces
    /// the version nibble to `4` and the variant bits to `10`.
    pub fn generate() -> Self {
        let bytes: [u8; 16] = rand::random();
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Check whether `raw` is a canonical UUID without building a value.
    pub fn is_valid(raw: &str) -> bool {
        parse_canonical(raw).is_some()
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Get the canonical lowercase string.
    pub fn value(&self) -> String {
        self.to_string()
    }
}

fn parse_canonical(raw: &str) -> Option<Uuid> {
    // Only the hyphenated spelling is 36 bytes long; this rules out the other
    // forms `Uuid::try_parse` would accept.
    if raw.len() != CANONICAL_LENGTH {
        return None;
    }
    Uuid::try_parse(raw).ok()
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for Identifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_string()
    }
}

/// Every `Uuid` already has a canonical rendering.
impl From<Uuid> for Identifier {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
