//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Storage (in-memory user store)
//! - HTTP API (axum router, controllers, server)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
