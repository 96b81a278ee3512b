//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness check
//!
//! # Users
//! GET    /users                - List all users with their todos
//! POST   /users                - Create a user
//!
//! # Todos (require `username` header)
//! GET    /todos                - List the user's todos
//! POST   /todos                - Create a todo
//! PUT    /todos/{id}           - Partially update a todo (responds 201)
//! PATCH  /todos/{id}/done      - Mark a todo as done
//! DELETE /todos/{id}           - Delete a todo
//! ```

pub mod todos;
pub mod users;

use axum::{
    Router,
    routing::{get, patch, put},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(users::list).post(users::create))
}

/// Create the todo routes router.
pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(todos::list).post(todos::create))
        .route("/todos/{id}", put(todos::update).delete(todos::delete))
        .route("/todos/{id}/done", patch(todos::mark_done))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(user_routes())
        .merge(todo_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}
