//! Tickoff server library.
//!
//! This crate provides the HTTP API as a library, allowing it to be tested
//! in-process and reused by the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::app;
