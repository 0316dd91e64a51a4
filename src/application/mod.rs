//! # Application Layer
//!
//! Use cases and the storage port they are written against.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
