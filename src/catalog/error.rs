use thiserror::Error;

use crate::utils::config::NETWORK_ERROR_MESSAGE;

/// Failures of a catalog search request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    /// Connectivity, DNS or timeout failure
    #[error("request failed: {0}")]
    Network(String),
    /// The catalog answered with a non-2xx status
    #[error("catalog returned HTTP {0}")]
    Status(u16),
    /// The body was not a `{ docs: [...] }` JSON document
    #[error("invalid catalog response: {0}")]
    Parse(String),
}

impl CatalogError {
    /// The single message shown to the user for any failure.
    pub fn user_message(&self) -> &'static str {
        NETWORK_ERROR_MESSAGE
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            CatalogError::Status(status.as_u16())
        } else if err.is_decode() {
            CatalogError::Parse(err.to_string())
        } else if err.is_builder() {
            CatalogError::Client(err.to_string())
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
