//! Access gates for todo routes.
//!
//! A request to `/todos*` first passes the user gate, which resolves the user
//! named by the `username` header. Single-todo routes then pass the todo gate,
//! which resolves the todo named by the `{id}` path segment within that user.
//! Either gate short-circuits the request with a 404 when resolution fails.
//!
//! The gates hand back typed scopes instead of stashing values on the request.
//! A scope owns the store's write guard, so the lookup and whatever mutation
//! follows happen under one lock acquisition.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn handler(
//!     State(state): State<AppState>,
//!     Username(username): Username,
//!     Path(id): Path<String>,
//! ) -> Result<Json<Todo>> {
//!     let user = UserScope::resolve(&state, &username).await?;
//!     let mut todo = TodoScope::resolve(user, &id)?;
//!     Ok(Json(todo.update(TodoPatch::mark_done())?))
//! }
//! ```

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use tickoff_core::{NewTodo, Store, Todo, TodoId, TodoPatch, User};
use tokio::sync::OwnedRwLockMappedWriteGuard;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// The request header that identifies the acting user.
pub const USERNAME_HEADER: &str = "username";

/// Extractor for the `username` header.
///
/// A missing or non-UTF-8 header is rejected the same way as an unknown
/// username, with a 404 `User not found.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(pub String);

impl<S> FromRequestParts<S> for Username
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .headers
            .get(USERNAME_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| Self(value.to_owned()))
            .ok_or_else(|| {
                tracing::debug!("Request has no usable username header");
                AppError::UserNotFound
            })
    }
}

/// A resolved user, with the store locked for the rest of the request.
pub struct UserScope {
    user: OwnedRwLockMappedWriteGuard<Store, User>,
}

impl UserScope {
    /// Run the user gate: lock the store and find the user by exact username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UserNotFound`] if no user has this username.
    pub async fn resolve(state: &AppState, username: &str) -> Result<Self> {
        let store = Arc::clone(state.store()).write_owned().await;

        let user = tokio::sync::OwnedRwLockWriteGuard::try_map(store, |store| {
            store.find_user_by_username_mut(username)
        })
        .map_err(|_| {
            tracing::debug!(%username, "User gate: unknown username");
            AppError::UserNotFound
        })?;

        Ok(Self { user })
    }

    /// Create a todo for this user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDeadline`] if the deadline cannot be parsed.
    pub fn create_todo(&mut self, new: NewTodo) -> Result<Todo> {
        let todo = self.user.add_todo(new)?;
        tracing::info!(user_id = %self.user.id, todo_id = %todo.id, "Todo created");
        Ok(todo)
    }
}

impl Deref for UserScope {
    type Target = User;

    fn deref(&self) -> &User {
        &self.user
    }
}

impl DerefMut for UserScope {
    fn deref_mut(&mut self) -> &mut User {
        &mut self.user
    }
}

/// A resolved todo within a resolved user.
pub struct TodoScope {
    user: UserScope,
    index: usize,
    id: TodoId,
}

impl TodoScope {
    /// Run the todo gate: find the todo whose ID is exactly `raw_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TodoNotFound`] if the user has no such todo.
    pub fn resolve(user: UserScope, raw_id: &str) -> Result<Self> {
        let found = user
            .position_of_todo(raw_id)
            .and_then(|index| user.todos.get(index).map(|todo| (index, todo.id)));

        let Some((index, id)) = found else {
            tracing::debug!(user_id = %user.id, todo_id = %raw_id, "Todo gate: unknown todo");
            return Err(AppError::TodoNotFound);
        };

        Ok(Self { user, index, id })
    }

    /// Apply a partial update and return the updated todo.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDeadline`] if the patch carries an
    /// unparseable deadline; the todo is left unchanged.
    pub fn update(&mut self, patch: TodoPatch) -> Result<Todo> {
        let todo = self
            .user
            .todos
            .get_mut(self.index)
            .ok_or(AppError::TodoNotFound)?;

        let updated = todo.apply(patch)?.clone();
        tracing::info!(user_id = %self.user.id, todo_id = %updated.id, "Todo updated");
        Ok(updated)
    }

    /// Remove the todo from its owner's list.
    pub fn delete(mut self) {
        self.user.delete_todo(self.id);
        tracing::info!(user_id = %self.user.id, todo_id = %self.id, "Todo deleted");
    }
}
