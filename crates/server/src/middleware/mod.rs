//! HTTP middleware and extractors.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors and transactions)
//! 2. CORS (any origin)
//! 3. `TraceLayer` (one span per request)
//! 4. Request ID (record on span, echo in response)
//!
//! Route-level gates live in [`gate`] and run inside the handlers.

pub mod gate;
pub mod json;
pub mod request_id;

pub use gate::{TodoScope, USERNAME_HEADER, UserScope, Username};
pub use json::JsonBody;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
