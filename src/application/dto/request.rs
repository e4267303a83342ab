//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Create user request.
///
/// Missing fields deserialize as empty strings so they are reported as
/// validation errors rather than as JSON rejections. Present fields are
/// trimmed before the length rules run.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        length(max = 255, message = "Email must be at most 255 characters"),
        email(message = "Invalid email format")
    )]
    pub email: String,
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_owned())
}
