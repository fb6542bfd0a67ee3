//! Error types for the storefront core.

use thiserror::Error;

/// Errors that can occur while building shell metadata.
#[derive(Error, Debug)]
pub enum Error {
    /// Structured-data serialization failed.
    #[error("structured data serialization: {0}")]
    Schema(#[from] serde_json::Error),
}
