use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::UserRepository;
use crate::domain::{DomainError, NewUser, User};

/// The ordered user list and the id counter. Always locked together.
struct UserTable {
    users: Vec<User>,
    next_id: i64,
}

/// Process-lifetime user store.
///
/// Every operation takes the single lock for its whole duration, so inserts,
/// updates and removals never interleave.
pub struct InMemoryUserRepository {
    table: Arc<Mutex<UserTable>>,
}

impl InMemoryUserRepository {
    /// An empty store whose first insert gets id 1.
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// The store as it looks at process start: one seed record, counter at 2.
    pub fn seeded() -> Self {
        Self::with_users(vec![seed_user()])
    }

    /// Starts from the given users, continuing ids after the highest one.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(User::id).max().map_or(1, |max| max + 1);
        Self {
            table: Arc::new(Mutex::new(UserTable { users, next_id })),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// The record present before any client request.
pub fn seed_user() -> User {
    User::new(1, "abc", "abc@gmail.com")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.lock().await;
        Ok(table.users.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let table = self.table.lock().await;
        Ok(table.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn insert(&self, candidate: NewUser) -> Result<User, DomainError> {
        let mut table = self.table.lock().await;

        let user = User::from_candidate(table.next_id, candidate);
        table.next_id += 1;
        table.users.push(user.clone());

        debug!("Inserted user {}, next id {}", user.id(), table.next_id);
        Ok(user)
    }

    async fn update(&self, id: i64, candidate: NewUser) -> Result<Option<User>, DomainError> {
        let mut table = self.table.lock().await;

        let Some(user) = table.users.iter_mut().find(|u| u.id() == id) else {
            return Ok(None);
        };
        user.apply(candidate);

        debug!("Updated user {} in memory", id);
        Ok(Some(user.clone()))
    }

    async fn remove(&self, id: i64) -> Result<bool, DomainError> {
        let mut table = self.table.lock().await;

        match table.users.iter().position(|u| u.id() == id) {
            Some(index) => {
                // Vec::remove shifts the tail left, keeping insertion order.
                table.users.remove(index);
                debug!("Removed user {} from memory", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
