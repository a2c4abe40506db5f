//! Shared error type across Page Tracker crates.

use thiserror::Error;

/// Stable error codes, used in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// The counter store could not serve the request.
    StoreUnavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PageTrackerError>;

/// Unified error type used by core and web.
#[derive(Debug, Error)]
pub enum PageTrackerError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    /// Connection refused, timeout, protocol error or a non-integer reply.
    /// The detail is for logs only and never reaches a visitor.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PageTrackerError {
    pub fn client_code(&self) -> ClientCode {
        match self {
            PageTrackerError::BadRequest(_) => ClientCode::BadRequest,
            PageTrackerError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            PageTrackerError::StoreUnavailable(_) => ClientCode::StoreUnavailable,
            PageTrackerError::Internal(_) => ClientCode::Internal,
        }
    }

    /// True for every failure of the counter store.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, PageTrackerError::StoreUnavailable(_))
    }
}
