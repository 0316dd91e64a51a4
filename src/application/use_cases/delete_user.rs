use std::sync::Arc;

use tracing::info;

use crate::application::UserRepository;
use crate::domain::DomainError;

/// Use case for deleting a user.
pub struct DeleteUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        if !self.user_repo.remove(id).await? {
            return Err(DomainError::not_found(format!("User not found: {}", id)));
        }

        info!("Deleted user {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::InMemoryUserRepository;

    #[tokio::test]
    async fn test_delete_then_missing() {
        let repo = Arc::new(InMemoryUserRepository::seeded());
        let use_case = DeleteUserUseCase::new(repo.clone());

        use_case.execute(1).await.unwrap();

        assert_eq!(repo.find_by_id(1).await.unwrap(), None);
        assert!(use_case.execute(1).await.unwrap_err().is_not_found());
    }
}
