//! Application Layer
//!
//! Command and query handlers that orchestrate the domain, plus the DTOs
//! exchanged with the presentation layer.
//!
//! - **commands**: state-changing instructions (`CreateUser`)
//! - **queries**: side-effect-free reads (`GetUserById`)
//! - **dto**: request/response bodies for the HTTP boundary
//!
//! Handlers depend only on the domain's `UserRepository` trait; the concrete
//! backend is injected by the composition root.

pub mod commands;
pub mod dto;
pub mod error;
pub mod queries;

pub use commands::{CreateUser, CreateUserHandler};
pub use error::UserError;
pub use queries::{GetUserById, GetUserByIdHandler};
