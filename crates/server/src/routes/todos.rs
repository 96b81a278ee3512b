//! Todo route handlers.
//!
//! Every handler runs the user gate; the `{id}` routes also run the todo gate.
//! Bodies are buffered up front but only decoded after the gates pass, so an
//! unknown user or todo is always a 404 whatever the body holds.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tickoff_core::{DeadlineInput, NewTodo, Todo, TodoPatch};

use crate::{
    error::{AppError, Result},
    middleware::{JsonBody, TodoScope, UserScope, Username},
    state::AppState,
};

/// Request body for creating a todo.
///
/// Both fields are optional here so a missing or `null` one can be reported
/// as `Missing parameter.` rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub deadline: Option<DeadlineInput>,
}

impl CreateTodoRequest {
    fn into_new_todo(self) -> Result<NewTodo> {
        match (self.title, self.deadline) {
            (Some(title), Some(deadline)) => Ok(NewTodo { title, deadline }),
            _ => Err(AppError::MissingParameter),
        }
    }
}

/// List the user's todos.
///
/// # Errors
///
/// Returns `AppError::UserNotFound` if the user gate fails.
pub async fn list(
    State(state): State<AppState>,
    Username(username): Username,
) -> Result<Json<Vec<Todo>>> {
    let user = UserScope::resolve(&state, &username).await?;
    Ok(Json(user.todos.clone()))
}

/// Create a todo for the user.
///
/// # Errors
///
/// Returns `AppError::UserNotFound` if the user gate fails,
/// `AppError::InvalidBody` if the body is not a JSON object of the right shape,
/// `AppError::MissingParameter` if `title` or `deadline` is missing, and
/// `AppError::InvalidDeadline` if the deadline cannot be parsed.
pub async fn create(
    State(state): State<AppState>,
    Username(username): Username,
    body: JsonBody,
) -> Result<(StatusCode, Json<Todo>)> {
    let mut user = UserScope::resolve(&state, &username).await?;
    let request: CreateTodoRequest = body.decode()?;
    let todo = user.create_todo(request.into_new_todo()?)?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Partially update a todo.
///
/// Responds `201 Created`, which existing clients depend on.
///
/// # Errors
///
/// Returns `AppError::UserNotFound` or `AppError::TodoNotFound` if a gate
/// fails, `AppError::InvalidBody` if the body is not a JSON object of the
/// right shape, and `AppError::InvalidDeadline` if the deadline cannot be
/// parsed.
pub async fn update(
    State(state): State<AppState>,
    Username(username): Username,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Todo>)> {
    let user = UserScope::resolve(&state, &username).await?;
    let mut todo = TodoScope::resolve(user, &id)?;
    let patch: TodoPatch = body.decode()?;

    Ok((StatusCode::CREATED, Json(todo.update(patch)?)))
}

/// Mark a todo as done, leaving every other field alone.
///
/// # Errors
///
/// Returns `AppError::UserNotFound` or `AppError::TodoNotFound` if a gate fails.
pub async fn mark_done(
    State(state): State<AppState>,
    Username(username): Username,
    Path(id): Path<String>,
) -> Result<Json<Todo>> {
    let user = UserScope::resolve(&state, &username).await?;
    let mut todo = TodoScope::resolve(user, &id)?;

    Ok(Json(todo.update(TodoPatch::mark_done())?))
}

/// Delete a todo.
///
/// # Errors
///
/// Returns `AppError::UserNotFound` or `AppError::TodoNotFound` if a gate fails.
pub async fn delete(
    State(state): State<AppState>,
    Username(username): Username,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let user = UserScope::resolve(&state, &username).await?;
    TodoScope::resolve(user, &id)?.delete();

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_title_or_deadline() {
        let no_title = CreateTodoRequest {
            title: None,
            deadline: Some(DeadlineInput::from("2030-01-01")),
        };
        assert!(matches!(
            no_title.into_new_todo(),
            Err(AppError::MissingParameter)
        ));

        let no_deadline = CreateTodoRequest {
            title: Some("Buy milk".to_string()),
            deadline: None,
        };
        assert!(matches!(
            no_deadline.into_new_todo(),
            Err(AppError::MissingParameter)
        ));
    }

    #[test]
    fn test_null_title_is_missing() {
        let request: CreateTodoRequest =
            JsonBody::from_bytes(r#"{"title":null,"deadline":"2030-01-01"}"#)
                .decode()
                .unwrap();
        assert!(matches!(
            request.into_new_todo(),
            Err(AppError::MissingParameter)
        ));
    }

    #[test]
    fn test_complete_request_becomes_new_todo() {
        let request = CreateTodoRequest {
            title: Some("Buy milk".to_string()),
            deadline: Some(DeadlineInput::from("2030-01-01")),
        };
        let new = request.into_new_todo();
        assert!(matches!(new, Ok(NewTodo { ref title, .. }) if title == "Buy milk"));
    }
}
