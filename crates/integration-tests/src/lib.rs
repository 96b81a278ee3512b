//! Integration tests for Tickoff.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tickoff-integration-tests
//! ```
//!
//! The tests drive the real router in-process through `tower::ServiceExt`,
//! so no port is bound and each test gets its own empty store.
//!
//! # Test Categories
//!
//! - `users_api` - user listing and creation
//! - `todos_api` - gates, todo CRUD and the end-to-end scenario

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tickoff_server::{middleware::USERNAME_HEADER, state::AppState};
use tower::ServiceExt;

/// A response with its body decoded.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    /// Raw body bytes as text.
    pub text: String,
    /// Body parsed as JSON, `Value::Null` when empty or not JSON.
    pub json: Value,
}

/// A fresh application with its own empty store.
#[derive(Clone)]
pub struct TestApp {
    router: Router,
    state: AppState,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Build an app around an empty store.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::default();
        let router = tickoff_server::app(state.clone());
        Self { router, state }
    }

    /// Shared state, for inspecting the store directly.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a request, optionally as a user and with a JSON body.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        username: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(username) = username {
            builder = builder.header(USERNAME_HEADER, username);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    /// Send a prebuilt request.
    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            json,
        }
    }

    /// `POST /users`.
    pub async fn create_user(&self, name: &str, username: &str) -> TestResponse {
        self.send(
            Method::POST,
            "/users",
            None,
            Some(serde_json::json!({ "name": name, "username": username })),
        )
        .await
    }

    /// `GET /users`.
    pub async fn list_users(&self) -> TestResponse {
        self.send(Method::GET, "/users", None, None).await
    }

    /// `POST /todos` as `username`.
    pub async fn create_todo(&self, username: &str, body: Value) -> TestResponse {
        self.send(Method::POST, "/todos", Some(username), Some(body))
            .await
    }

    /// `GET /todos` as `username`.
    pub async fn list_todos(&self, username: &str) -> TestResponse {
        self.send(Method::GET, "/todos", Some(username), None).await
    }

    /// `PUT /todos/{id}` as `username`.
    pub async fn update_todo(&self, username: &str, id: &str, body: Value) -> TestResponse {
        self.send(
            Method::PUT,
            &format!("/todos/{id}"),
            Some(username),
            Some(body),
        )
        .await
    }

    /// `PATCH /todos/{id}/done` as `username`.
    pub async fn mark_done(&self, username: &str, id: &str) -> TestResponse {
        self.send(
            Method::PATCH,
            &format!("/todos/{id}/done"),
            Some(username),
            None,
        )
        .await
    }

    /// `DELETE /todos/{id}` as `username`.
    pub async fn delete_todo(&self, username: &str, id: &str) -> TestResponse {
        self.send(
            Method::DELETE,
            &format!("/todos/{id}"),
            Some(username),
            None,
        )
        .await
    }

    /// Create a user and a todo for them, returning the todo's ID.
    pub async fn seed_todo(&self, username: &str, title: &str) -> String {
        let user = self.create_user(username, username).await;
        assert!(
            user.status == StatusCode::CREATED || user.status == StatusCode::BAD_REQUEST,
            "unexpected status creating user: {}",
            user.status
        );

        let todo = self
            .create_todo(
                username,
                serde_json::json!({ "title": title, "deadline": "2030-01-01" }),
            )
            .await;
        assert_eq!(todo.status, StatusCode::CREATED);
        todo.json["id"].as_str().unwrap().to_string()
    }
}

/// The error message from a `{"error": ...}` body.
#[must_use]
pub fn error_message(response: &TestResponse) -> Option<&str> {
    response.json.get("error").and_then(Value::as_str)
}
