//! # Domain Layer
//!
//! The user model, validation rules, and domain errors.
//! This layer is independent of the HTTP framework and the store backend.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
