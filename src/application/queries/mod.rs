//! Queries
//!
//! Read requests, handled without side effects.

mod get_user_by_id;

pub use get_user_by_id::{GetUserById, GetUserByIdHandler};
