use std::sync::Arc;

use crate::application::UserRepository;
use crate::domain::{DomainError, User};

pub struct GetUsersUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl GetUsersUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User, DomainError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User not found: {}", id)))
    }
}
