//! Todo domain type and its operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DeadlineError, DeadlineInput, FieldUpdate, TodoId, timestamp};

/// A single todo item owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique todo ID, assigned at creation.
    pub id: TodoId,
    /// Free-text title.
    pub title: String,
    /// Whether the todo has been completed.
    pub done: bool,
    /// When the todo is due.
    #[serde(with = "timestamp")]
    pub deadline: DateTime<Utc>,
    /// When the todo was created. Never changes.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Input for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub deadline: DeadlineInput,
}

/// A partial update to a todo.
///
/// Fields left [`FieldUpdate::Unchanged`] or sent as `null` keep their
/// current value. A blank deadline string or a deadline of `0` also keeps the
/// current deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TodoPatch {
    pub title: FieldUpdate<String>,
    pub deadline: FieldUpdate<DeadlineInput>,
    pub done: FieldUpdate<bool>,
}

impl TodoPatch {
    /// A patch that only marks the todo as done.
    #[must_use]
    pub fn mark_done() -> Self {
        Self {
            done: FieldUpdate::Set(true),
            ..Self::default()
        }
    }
}

impl Todo {
    /// Build a fresh todo: new ID, not done, `created_at` set to now.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineError`] if the deadline cannot be parsed.
    pub fn create(new: NewTodo) -> Result<Self, DeadlineError> {
        let deadline = new.deadline.parse()?;

        Ok(Self {
            id: TodoId::generate(),
            title: new.title,
            done: false,
            deadline,
            created_at: Utc::now(),
        })
    }

    /// Apply a partial update in place and return the updated todo.
    ///
    /// The deadline is parsed before anything is written, so a rejected patch
    /// leaves the todo untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineError`] if a given deadline cannot be parsed.
    pub fn apply(&mut self, patch: TodoPatch) -> Result<&Self, DeadlineError> {
        let deadline = patch
            .deadline
            .into_value()
            .filter(|input| !input.is_unset())
            .map(|input| input.parse())
            .transpose()?;

        if let Some(title) = patch.title.into_value() {
            self.title = title;
        }
        if let Some(deadline) = deadline {
            self.deadline = deadline;
        }
        if let Some(done) = patch.done.into_value() {
            self.done = done;
        }

        Ok(self)
    }
}
