//! Domain services containing core business rules.

mod user_validator;

pub use user_validator::*;
