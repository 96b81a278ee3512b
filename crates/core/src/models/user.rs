//! User domain type.

use serde::{Deserialize, Serialize};

use super::todo::{NewTodo, Todo};
use crate::types::{DeadlineError, TodoId, UserId};

/// A user and the todos they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, assigned at creation.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique handle used to look the user up.
    pub username: String,
    /// Todos in insertion order.
    pub todos: Vec<Todo>,
}

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub username: String,
}

impl User {
    /// Build a user with a fresh ID and no todos.
    #[must_use]
    pub fn new(new: NewUser) -> Self {
        Self {
            id: UserId::generate(),
            name: new.name,
            username: new.username,
            todos: Vec::new(),
        }
    }

    /// Create a todo, append it to this user's list and return a copy of it.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineError`] if the deadline cannot be parsed; the list is
    /// left unchanged.
    pub fn add_todo(&mut self, new: NewTodo) -> Result<Todo, DeadlineError> {
        let todo = Todo::create(new)?;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Position of the todo whose ID is exactly `raw`.
    #[must_use]
    pub fn position_of_todo(&self, raw: &str) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id.matches(raw))
    }

    /// Remove the todo with the given ID.
    ///
    /// Returns whether anything was removed. Removing an absent todo is a no-op.
    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        self.todos.len() != before
    }
}
