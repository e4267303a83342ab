//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//! Each one is built through a validating constructor, so holding a value
//! means holding a valid one.
//!
//! ## Value Objects
//!
//! - **Identifier**: canonical lowercase UUID, v4 when generated
//! - **Email**: trimmed, syntactically valid email address

mod email;
mod identifier;

pub use email::*;
pub use identifier::*;
