//! Redis-backed counter store.
//!
//! The URL is parsed eagerly; the connection is established on the first
//! increment and shared for the life of the process. `ConnectionManager` is
//! multiplexed and cheap to clone, so concurrent requests never serialize on
//! an application lock. It is built with zero connect retries: a refused
//! connection fails the request at once and the next request reconnects.

use std::time::Duration;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, Client, ErrorKind, RedisError};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use page_tracker_core::error::{Result, PageTrackerError};

use crate::config::StoreSection;

use super::CounterStore;

/// `ConnectionManager` backoff parameters; retries stay at zero.
const BACKOFF_EXPONENT_BASE: u64 = 2;
const BACKOFF_FACTOR_MS: u64 = 100;
const CONNECT_RETRIES: usize = 0;

pub struct RedisCounterStore {
    client: Client,
    conn: OnceCell<ConnectionManager>,
    timeout: Duration,
    url_for_logs: String,
}

impl RedisCounterStore {
    /// Parse the configured URL. Does not touch the network.
    pub fn open(cfg: &StoreSection) -> Result<Self> {
        let client = Client::open(cfg.url.as_str()).map_err(|e| {
            PageTrackerError::BadRequest(format!("store.url is not a valid redis url: {e}"))
        })?;

        Ok(Self {
            client,
            conn: OnceCell::new(),
            timeout: Duration::from_millis(cfg.timeout_ms),
            url_for_logs: redact_url(&cfg.url),
        })
    }

    /// Shared connection, established at most once. A failed attempt leaves
    /// the cell empty so the next request tries again.
    async fn connection(&self) -> Result<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let conn = ConnectionManager::new_with_backoff(
                    self.client.clone(),
                    BACKOFF_EXPONENT_BASE,
                    BACKOFF_FACTOR_MS,
                    CONNECT_RETRIES,
                )
                .await
                .map_err(store_error)?;
                info!(url = %self.url_for_logs, "redis connection established");
                Ok::<_, PageTrackerError>(conn)
            })
            .await?;
        Ok(conn.clone())
    }

    async fn incr_once(&self, key: &str) -> Result<i64> {
        let mut conn = self.connection().await?;
        let views: i64 = redis::cmd("INCR")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(store_error)?;
        debug!(key, views, "INCR ok");
        Ok(views)
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn incr(&self, key: &str) -> Result<i64> {
        match tokio::time::timeout(self.timeout, self.incr_once(key)).await {
            Ok(res) => res,
            Err(_) => Err(PageTrackerError::StoreUnavailable(format!(
                "timeout: no reply within {} ms",
                self.timeout.as_millis()
            ))),
        }
    }
}

/// Collapse every redis failure into the single store error class.
fn store_error(e: RedisError) -> PageTrackerError {
    let cause = if e.is_connection_refusal() {
        "connection refused"
    } else if e.is_timeout() {
        "timeout"
    } else if e.kind() == ErrorKind::TypeError {
        "non-integer reply"
    } else if e.is_io_error() || e.is_connection_dropped() {
        "connection error"
    } else {
        "command failed"
    };
    PageTrackerError::StoreUnavailable(format!("{cause}: {e}"))
}

/// Hide the userinfo part (`user:password@`) of a store URL.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    match rest.rsplit_once('@') {
        Some((_, host)) => format!("{scheme}://***@{host}"),
        None => url.to_string(),
    }
}
