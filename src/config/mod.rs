//! # Configuration Module
//!
//! Loads the service settings, layered from lowest to highest priority:
//! - Built-in defaults (in-memory repository, port 3000)
//! - `config/default.toml` and `config/{RUN_ENV}.toml`
//! - `APP__`-prefixed environment variables (`APP__DATABASE__URL`, ...)
//! - Flat overrides: `SERVER_HOST`, `SERVER_PORT`, `DATABASE_URL`,
//!   `REPOSITORY_BACKEND`
//!
//! A `.env` file is read first via dotenvy.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use user_service::config::{RepositoryBackend, Settings};
//!
//! let settings = Settings::load()?;
//! if settings.repository.backend == RepositoryBackend::Postgres {
//!     println!("Persisting users to {}", settings.database.url);
//! }
//! ```

mod settings;

pub use settings::*;
