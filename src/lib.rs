//! Tagmarks — a search-first bookmark client for a REST/JSON backend.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod client;
pub mod config;
pub mod search;
pub mod tags;
pub mod types;
