//! Deferred JSON body extractor.
//!
//! The gates on todo routes answer 404 before the body is looked at, so the
//! body is buffered by the extractor and decoded by the handler once the
//! gates have passed.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

/// Decoded in place of a missing or non-JSON body.
const EMPTY_OBJECT: &[u8] = b"{}";

/// A buffered request body, decoded on demand with [`JsonBody::decode`].
///
/// A body without a JSON content type, or with no bytes at all, decodes as
/// an empty object. Syntax errors and wrongly typed fields become
/// [`AppError::InvalidBody`], a 400 with the usual `{"error": ...}` shape.
#[derive(Debug, Clone, Default)]
pub struct JsonBody {
    bytes: Option<Bytes>,
}

impl JsonBody {
    /// Wrap raw bytes as if they arrived with a JSON content type.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self {
            bytes: (!bytes.is_empty()).then_some(bytes),
        }
    }

    /// Decode the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidBody`] if the body is not valid JSON or does
    /// not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        let bytes = self.bytes.as_deref().unwrap_or(EMPTY_OBJECT);
        let Json(value) = Json::<T>::from_bytes(bytes)?;
        Ok(value)
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self::default());
        }

        let bytes = Bytes::from_request(req, state).await?;
        Ok(Self::from_bytes(bytes))
    }
}

/// Whether the content type is `application/json` or an `application/*+json`.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct Named {
        name: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> JsonBody {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(axum::body::Body::from(body)).unwrap();
        JsonBody::from_request(request, &()).await.unwrap()
    }

    #[test]
    fn test_json_content_types() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        for accepted in [
            "application/json",
            "application/json; charset=utf-8",
            "Application/JSON",
            "application/merge-patch+json",
        ] {
            headers.insert(header::CONTENT_TYPE, accepted.parse().unwrap());
            assert!(has_json_content_type(&headers), "{accepted}");
        }

        for rejected in ["text/plain", "application/x-www-form-urlencoded", "json"] {
            headers.insert(header::CONTENT_TYPE, rejected.parse().unwrap());
            assert!(!has_json_content_type(&headers), "{rejected}");
        }
    }

    #[tokio::test]
    async fn test_json_body_decodes() {
        let body = extract(Some("application/json"), r#"{"name":"Ann"}"#).await;
        assert_eq!(
            body.decode::<Named>().unwrap(),
            Named {
                name: Some("Ann".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_missing_or_foreign_body_is_empty_object() {
        for body in [
            extract(None, "").await,
            extract(Some("application/json"), "").await,
            extract(Some("text/plain"), r#"{"name":"Ann"}"#).await,
        ] {
            assert_eq!(body.decode::<Named>().unwrap(), Named { name: None });
        }
    }

    #[test]
    fn test_syntax_and_type_errors_are_bad_request() {
        for raw in [&b"{not json"[..], &br#"{"name":5}"#[..], &b"[]"[..]] {
            let err = JsonBody::from_bytes(raw).decode::<Named>().unwrap_err();
            assert!(matches!(err, AppError::InvalidBody(_)));
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }
}
