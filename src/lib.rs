//! # User Service Library
//!
//! A small user module built as ports and adapters:
//! - Validated value objects (`Identifier`, `Email`) and the `User` entity
//! - A `UserRepository` port with in-memory and PostgreSQL adapters
//! - `CreateUser` command and `GetUserById` query handlers
//! - A RESTful HTTP API exposing both
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, value objects, error taxonomy, and the repository port
//! - **Application Layer**: Command/query handlers and DTOs
//! - **Infrastructure Layer**: Repository adapters, database pool, and metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! user_service/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, errors, and the repository port
//! +-- application/    Commands, queries, and DTOs
//! +-- infrastructure/ Repository adapters, database, and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         HTTP error mapping and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Commands and queries
pub mod application;

// Infrastructure layer - Adapters
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
