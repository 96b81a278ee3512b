//! User route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tickoff_core::{NewUser, User};

use crate::{
    error::{AppError, Result},
    middleware::JsonBody,
    state::AppState,
};

/// Request body for creating a user.
///
/// Fields are optional so an absent or `null` one is reported as
/// `Missing parameter.`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub username: Option<String>,
}

impl CreateUserRequest {
    fn into_new_user(self) -> Result<NewUser> {
        match (self.name, self.username) {
            (Some(name), Some(username)) => Ok(NewUser { name, username }),
            _ => Err(AppError::MissingParameter),
        }
    }
}

/// List every user with their todos, in creation order.
pub async fn list(State(state): State<AppState>) -> Json<Vec<User>> {
    let store = state.store().read().await;
    tracing::debug!(count = store.len(), "Listing users");
    Json(store.users().to_vec())
}

/// Create a user.
///
/// # Errors
///
/// Returns `AppError::InvalidBody` if the body is not a JSON object of the
/// right shape, `AppError::MissingParameter` if `name` or `username` is
/// missing, and `AppError::UsernameTaken` if the username is already in use.
pub async fn create(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<User>)> {
    let new = body.decode::<CreateUserRequest>()?.into_new_user()?;
    let user = state.store().write().await.create_user(new)?;

    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_or_username() {
        for raw in [
            r#"{"username":"ann"}"#,
            r#"{"name":"Ann"}"#,
            r#"{"name":"Ann","username":null}"#,
            "{}",
        ] {
            let request: CreateUserRequest = JsonBody::from_bytes(raw).decode().unwrap();
            assert!(
                matches!(request.into_new_user(), Err(AppError::MissingParameter)),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_complete_request_becomes_new_user() {
        let request: CreateUserRequest = JsonBody::from_bytes(r#"{"name":"Ann","username":"ann"}"#)
            .decode()
            .unwrap();
        assert_eq!(
            request.into_new_user().unwrap(),
            NewUser {
                name: "Ann".to_string(),
                username: "ann".to_string(),
            }
        );
    }
}
