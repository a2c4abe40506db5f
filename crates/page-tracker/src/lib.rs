//! Top-level facade crate for Page Tracker.
//!
//! Re-exports core types and the web library so users can depend on a single crate.

pub mod core {
    pub use page_tracker_core::*;
}

pub mod web {
    pub use page_tracker_web::*;
}
