//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::CreateUserRequest;
pub use response::{DataResponse, UserResponse};
