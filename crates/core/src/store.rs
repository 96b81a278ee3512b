//! In-memory user store.
//!
//! An ordered, append-only sequence of users with linear-scan lookups. The
//! store itself is not synchronized; the server wraps it in a lock.

use crate::models::{NewUser, User};

/// Errors returned by [`Store`] operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Another user already has this username.
    #[error("username already taken: {0}")]
    UsernameTaken(String),
}

/// All users known to the process, in creation order.
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// All users in creation order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Whether some user already has `username`.
    #[must_use]
    pub fn is_username_taken(&self, username: &str) -> bool {
        self.users.iter().any(|user| user.username == username)
    }

    /// Create a user with a fresh ID and no todos, append it, and return a copy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UsernameTaken`] if the username is in use. The
    /// store is not modified in that case.
    pub fn create_user(&mut self, new: NewUser) -> Result<User, StoreError> {
        if self.is_username_taken(&new.username) {
            return Err(StoreError::UsernameTaken(new.username));
        }

        let user = User::new(new);
        self.users.push(user.clone());
        Ok(user)
    }

    /// First user whose username is exactly `username`.
    #[must_use]
    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    /// Mutable variant of [`Store::find_user_by_username`].
    pub fn find_user_by_username_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.username == username)
    }
}
