//! Error types for vitalog

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input to a pure function. Fails fast, never retried.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A call against the external store failed (network, auth expiry,
    /// timeout). The underlying cause is opaque to the core.
    #[error("store request failed: {0}")]
    Store(#[source] anyhow::Error),

    /// The caller cancelled an in-flight fetch. Not a failure; must be
    /// suppressed from user-facing error reporting.
    #[error("request cancelled")]
    Cancelled,
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub fn store(cause: impl Into<anyhow::Error>) -> Self {
        Error::Store(cause.into())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
