//! Counter store seam.
//!
//! The handler only ever sees [`CounterStore`]; the production implementation
//! talks to Redis. Atomicity of the increment belongs to the store.

pub mod redis;

use async_trait::async_trait;

use page_tracker_core::error::Result;

pub use self::redis::RedisCounterStore;

/// A store exposing an atomic increment.
///
/// Implementations must be safe for concurrent callers. Every failure mode
/// (connect, timeout, protocol, non-integer reply) is reported as
/// `PageTrackerError::StoreUnavailable`; implementations never retry.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Add 1 to `key` and return the value after the increment.
    /// A missing key counts as 0.
    async fn incr(&self, key: &str) -> Result<i64>;
}
