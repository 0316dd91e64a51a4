use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// Serializes as `{"id":..,"name":..,"email":..}` in that field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: i64,
    name: String,
    email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Builds the record stored for a candidate once the store has assigned its id.
    pub fn from_candidate(id: i64, candidate: NewUser) -> Self {
        Self {
            id,
            name: candidate.name,
            email: candidate.email,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replaces name and email in place. The id never changes.
    pub fn apply(&mut self, candidate: NewUser) {
        self.name = candidate.name;
        self.email = candidate.email;
    }
}

/// The client-controlled part of a user: everything except the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_in_field_order() {
        let user = User::new(1, "abc", "abc@gmail.com");

        let json = serde_json::to_string(&user).unwrap();

        assert_eq!(json, r#"{"id":1,"name":"abc","email":"abc@gmail.com"}"#);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut user = User::new(7, "old", "old@gmail.com");

        user.apply(NewUser::new("new", "new@gmail.com"));

        assert_eq!(user.id(), 7);
        assert_eq!(user.name(), "new");
        assert_eq!(user.email(), "new@gmail.com");
    }

    #[test]
    fn test_from_candidate() {
        let user = User::from_candidate(3, NewUser::new("bob", "bob@gmail.com"));

        assert_eq!(user, User::new(3, "bob", "bob@gmail.com"));
    }
}
