pub mod container;
pub mod controller;
pub mod error;
pub mod request;
pub mod router;
pub mod server;

pub use container::{Container, ContainerConfig};
pub use error::ApiError;
pub use router::{routes, Dispatcher, UserRequest};
pub use server::{serve, ServerConfig};
