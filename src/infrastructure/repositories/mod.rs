//! Repository Implementations
//!
//! Adapters implementing the domain's `UserRepository` trait.
//!
//! ## Available Repositories
//!
//! - **InMemoryUserRepository** - reference adapter backed by a concurrent map,
//!   used in tests and for the `memory` backend
//! - **PgUserRepository** - PostgreSQL adapter using a single-row upsert
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service::domain::UserRepository;
//! use user_service::infrastructure::repositories::{InMemoryUserRepository, PgUserRepository};
//!
//! let users: Arc<dyn UserRepository> = match pool {
//!     Some(pool) => Arc::new(PgUserRepository::new(pool)),
//!     None => Arc::new(InMemoryUserRepository::new()),
//! };
//! ```

pub mod in_memory_user_repository;
pub mod user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
pub use user_repository::PgUserRepository;
