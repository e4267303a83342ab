//! # Domain Layer
//!
//! The core of the user module. It is independent of any framework or
//! infrastructure concern.
//!
//! ## Structure
//!
//! - **value_objects**: Self-validating immutable values (Identifier, Email)
//! - **entities**: The User aggregate and its repository trait
//! - **errors**: The domain error taxonomy and repository failures
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Values are built only through validating constructors
//! - Repository traits define data access contracts

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
