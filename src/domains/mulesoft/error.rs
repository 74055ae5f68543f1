//! Error types for documentation scraping.
//!
//! Every error here is eventually rendered into a structured result payload
//! so the calling agent can read it; none of them escape a tool call.

use serde::Serialize;
use thiserror::Error;

/// Why a page could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchCause {
    /// DNS, connect, TLS or timeout failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body could not be read.
    #[error("unreadable body: {0}")]
    Body(String),
}

/// A page could not be reached or returned a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch {url}: {cause}")]
pub struct FetchError {
    pub url: String,
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(url: impl Into<String>, cause: FetchCause) -> Self {
        Self {
            url: url.into(),
            cause,
        }
    }

    /// Create a transport-level failure.
    pub fn transport(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::new(url, FetchCause::Transport(msg.into()))
    }

    /// Create a non-success status failure.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::new(url, FetchCause::Status(status))
    }
}

/// Errors raised while scraping documentation pages.
#[derive(Debug, Clone, Error)]
pub enum ScrapeError {
    /// The source could not be reached.
    #[error("Failed to fetch MuleSoft documentation: {0}")]
    Fetch(#[from] FetchError),

    /// The source was reached but yielded no usable structure.
    #[error("Failed to parse MuleSoft documentation: {0}")]
    Parse(String),

    /// A named entity could not be resolved.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ScrapeError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch(_) => ErrorKind::Fetch,
            Self::Parse(_) => ErrorKind::Parse,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Serialized discriminant for failure payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Fetch,
    Parse,
    NotFound,
}
