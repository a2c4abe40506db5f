//! Page Tracker web library entry.
//!
//! This crate wires configuration, the counter store and the `/` handler
//! into an axum service. It is consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod handler;
pub mod router;
pub mod store;
