//! Page Tracker core: transport-agnostic primitives and error types.
//!
//! This crate defines the counter key, the page text served to visitors and
//! the error surface shared by the web crate and its tests. It intentionally
//! carries no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PageTrackerError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod page;

/// Shared result type.
pub use error::{Result, PageTrackerError};
pub use page::{render_views, APOLOGY, COUNTER_KEY};
