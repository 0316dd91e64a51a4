use async_trait::async_trait;

use crate::domain::{DomainError, NewUser, User};

/// Storage for user records.
///
/// Each call is one atomic step against the store; nothing spans calls.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Assigns the next id to the candidate and appends it.
    async fn insert(&self, candidate: NewUser) -> Result<User, DomainError>;

    /// Overwrites name and email of an existing user, keeping its id.
    async fn update(&self, id: i64, candidate: NewUser) -> Result<Option<User>, DomainError>;

    /// Removes the user, returning `false` if no user had that id.
    async fn remove(&self, id: i64) -> Result<bool, DomainError>;
}
