use std::sync::Arc;

use tracing::debug;

use crate::application::{
    CreateUserUseCase, DeleteUserUseCase, GetUsersUseCase, UpdateUserUseCase, UserRepository,
};
use crate::InMemoryUserRepository;

pub struct ContainerConfig {
    /// Start with the seed record (id 1) instead of an empty store.
    pub seed: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

/// Owns the user store and hands out use cases bound to it.
pub struct Container {
    user_repo: Arc<dyn UserRepository>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let user_repo: Arc<dyn UserRepository> = if config.seed {
            debug!("Using seeded in-memory user store");
            Arc::new(InMemoryUserRepository::seeded())
        } else {
            debug!("Using empty in-memory user store");
            Arc::new(InMemoryUserRepository::new())
        };

        Self::with_repository(user_repo)
    }

    pub fn with_repository(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub fn create_use_case(&self) -> CreateUserUseCase {
        CreateUserUseCase::new(self.user_repo.clone())
    }

    pub fn get_use_case(&self) -> GetUsersUseCase {
        GetUsersUseCase::new(self.user_repo.clone())
    }

    pub fn update_use_case(&self) -> UpdateUserUseCase {
        UpdateUserUseCase::new(self.user_repo.clone())
    }

    pub fn delete_use_case(&self) -> DeleteUserUseCase {
        DeleteUserUseCase::new(self.user_repo.clone())
    }
}
