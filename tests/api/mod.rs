//! REST API tests, run against the router with the in-memory backend.

mod health_tests;
mod user_tests;
