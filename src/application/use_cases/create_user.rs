use std::sync::Arc;

use tracing::info;

use crate::application::UserRepository;
use crate::domain::{validate_user, DomainError, NewUser, User};

/// Use case for registering a new user.
pub struct CreateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, candidate: NewUser) -> Result<User, DomainError> {
        validate_user(&candidate)?;

        let user = self.user_repo.insert(candidate).await?;
        info!("Created user {} ({})", user.id(), user.email());

        Ok(user)
    }
}
