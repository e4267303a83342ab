//! # Domain Entities
//!
//! Identity-bearing aggregates and their repository traits.
//!
//! ## Entities
//!
//! - **User**: user account with a validated name and email, keyed by `UserId`
//!
//! ## Repository Traits
//!
//! Each aggregate has an associated repository trait defining its storage
//! contract. Implementations live in the infrastructure layer, following the
//! dependency inversion principle.

mod user;

pub use user::{User, UserId, UserRepository};

#[cfg(test)]
pub use user::MockUserRepository;
