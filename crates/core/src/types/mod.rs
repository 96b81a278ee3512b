//! Core types for Tickoff.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod deadline;
pub mod field_update;
pub mod id;
pub mod timestamp;

pub use deadline::{DeadlineError, DeadlineInput};
pub use field_update::FieldUpdate;
pub use id::*;
