//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Repository adapters (in-memory, PostgreSQL)
//! - Database connection pool and migrations
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
