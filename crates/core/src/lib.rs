//! Tickoff Core - domain types and in-memory store.
//!
//! This crate provides everything the Tickoff server needs that does not
//! touch HTTP:
//! - `types` - type-safe IDs, deadline parsing, partial-update fields
//! - `models` - users and the todos they own
//! - `store` - the ordered in-memory user collection
//!
//! # Architecture
//!
//! The core crate has no I/O and no synchronization. The server owns a
//! [`Store`] behind a lock and calls into these types while holding it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod store;
pub mod types;

pub use models::*;
pub use store::{Store, StoreError};
pub use types::*;
