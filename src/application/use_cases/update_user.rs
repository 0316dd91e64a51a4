use std::sync::Arc;

use tracing::info;

use crate::application::UserRepository;
use crate::domain::{validate_user, DomainError, NewUser, User};

/// Use case for replacing a user's name and email.
///
/// The id always comes from the caller's route, never from the payload.
pub struct UpdateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, id: i64, candidate: NewUser) -> Result<User, DomainError> {
        // Validation runs before the lookup, so a bad body on a missing id is a 400.
        validate_user(&candidate)?;

        let user = self
            .user_repo
            .update(id, candidate)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User not found: {}", id)))?;

        info!("Updated user {}", user.id());
        Ok(user)
    }
}
