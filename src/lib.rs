pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    CreateUserUseCase, DeleteUserUseCase, GetUsersUseCase, UpdateUserUseCase, UserRepository,
};

pub use connector::{
    routes, serve, ApiError, Container, ContainerConfig, Dispatcher, InMemoryUserRepository,
    ServerConfig, UserRequest,
};

pub use domain::{validate_user, DomainError, NewUser, User, ValidationError};
