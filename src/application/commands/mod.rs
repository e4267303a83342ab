//! Commands
//!
//! Instructions that change state. Each is handled exactly once and returns
//! nothing on success.

mod create_user;

pub use create_user::{CreateUser, CreateUserHandler};
