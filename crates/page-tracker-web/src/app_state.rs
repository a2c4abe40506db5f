//! Shared application state.
//!
//! Built once at startup and cloned into every request by axum. The counter
//! store is the only shared resource.

use std::sync::Arc;

use page_tracker_core::error::Result;

use crate::config::PageTrackerConfig;
use crate::store::{CounterStore, RedisCounterStore};

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn CounterStore>,
}

impl AppState {
    /// Build state backed by Redis, as configured.
    /// Returns Result so main can report a bad store URL instead of panicking.
    pub fn new(cfg: &PageTrackerConfig) -> Result<Self> {
        let store = RedisCounterStore::open(&cfg.store)?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Build state around any counter store (tests, alternative backends).
    pub fn with_store(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<dyn CounterStore> {
        Arc::clone(&self.store)
    }
}
