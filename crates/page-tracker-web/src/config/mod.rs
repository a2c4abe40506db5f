//! Config loader (strict parsing) and one-time environment resolution.
//!
//! Precedence: defaults, then the YAML file, then `REDIS_URL`.

pub mod schema;

use std::fs;
use std::path::Path;

use page_tracker_core::error::{Result, PageTrackerError};

pub use schema::{PageTrackerConfig, StoreSection, WebSection};

/// Names an explicit config file. A named file that cannot be read is an error.
pub const CONFIG_PATH_ENV: &str = "PAGE_TRACKER_CONFIG";
/// Read when `PAGE_TRACKER_CONFIG` is unset; silently skipped if absent.
pub const DEFAULT_CONFIG_PATH: &str = "page-tracker.yaml";
/// Overrides `store.url`.
pub const REDIS_URL_ENV: &str = "REDIS_URL";

pub fn load_from_file(path: &str) -> Result<PageTrackerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PageTrackerError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PageTrackerConfig> {
    let cfg: PageTrackerConfig = serde_yaml::from_str(s)
        .map_err(|e| PageTrackerError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the process configuration from the real environment.
pub fn resolve() -> Result<PageTrackerConfig> {
    resolve_with(|name| std::env::var(name).ok())
}

/// Resolve using `lookup` in place of the process environment.
pub fn resolve_with<F>(lookup: F) -> Result<PageTrackerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = match non_empty(lookup(CONFIG_PATH_ENV)) {
        Some(path) => load_from_file(&path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        None => PageTrackerConfig::default(),
    };
    apply_env(cfg, lookup)
}

/// Apply environment overrides to an already parsed config and re-validate.
pub fn apply_env<F>(mut cfg: PageTrackerConfig, lookup: F) -> Result<PageTrackerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(lookup(REDIS_URL_ENV)) {
        cfg.store.url = url;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
