//! Presentation Layer
//!
//! HTTP routes and the middleware stack wrapped around them.

pub mod http;
pub mod middleware;
