/// User domain type
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// User account
///
/// The public shape of an account. The password lives only inside the
/// backend's own records and is never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name, unique per account
    pub username: String,

    /// Login email, unique per account
    pub email: String,
}

impl User {
    /// Create a new user with a generated ID
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Successful authentication payload: the user plus their session token.
///
/// Both fields travel together: auth state stores them together on success
/// and clears them together on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Authenticated user snapshot
    pub user: User,

    /// Opaque session token
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_creation() {
        let user = User::new("alice", "alice@example.com");
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn users_get_distinct_ids() {
        let a = User::new("a", "a@example.com");
        let b = User::new("b", "b@example.com");
        assert_ne!(a.id, b.id);
    }
}
