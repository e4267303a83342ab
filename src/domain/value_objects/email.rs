//! Email address value object.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::domain::errors::DomainError;

/// A trimmed, syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Trim surrounding whitespace and validate the address grammar.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEmail`] carrying the trimmed input.
    pub fn from_string(raw: &str) -> Result<Self, DomainError> {
        let candidate = raw.trim().to_owned();
        if !candidate.validate_email() {
            return Err(DomainError::InvalidEmail(candidate));
        }
        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
