use std::net::SocketAddr;

use serde::Deserialize;
use page_tracker_core::error::{Result, PageTrackerError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageTrackerConfig {
    pub version: u32,

    #[serde(default)]
    pub web: WebSection,

    #[serde(default)]
    pub store: StoreSection,
}

impl Default for PageTrackerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            web: WebSection::default(),
            store: StoreSection::default(),
        }
    }
}

impl PageTrackerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PageTrackerError::UnsupportedVersion);
        }

        self.web.validate()?;
        self.store.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for WebSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl WebSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            PageTrackerError::BadRequest(format!(
                "web.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_store_url")]
    pub url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            url: default_store_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(PageTrackerError::BadRequest("store.url must not be empty".into()));
        }
        if !(50..=60000).contains(&self.timeout_ms) {
            return Err(PageTrackerError::BadRequest(
                "store.timeout_ms must be between 50 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_store_url() -> String {
    "redis://localhost:6379".into()
}
fn default_timeout_ms() -> u64 {
    1000
}
