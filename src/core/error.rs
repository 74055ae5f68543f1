//! Error types and handling for the MCP server.
//!
//! A unified error type over every domain error and external failure.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from a documentation scrape.
    #[error("Scrape error: {0}")]
    Scrape(#[from] crate::domains::mulesoft::ScrapeError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport setup or session errors.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::mulesoft::{FetchError, ScrapeError};

    #[test]
    fn test_scrape_error_converts() {
        let err: Error = ScrapeError::from(FetchError::status("https://docs", 503)).into();
        assert!(matches!(err, Error::Scrape(_)));
        assert!(err.to_string().starts_with("Scrape error:"));
    }

    #[test]
    fn test_config_error_message() {
        assert_eq!(Error::config("bad port").to_string(), "Configuration error: bad port");
    }
}
