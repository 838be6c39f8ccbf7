//! Error types for discovery and acquisition

use thiserror::Error;

/// Errors that can occur while fetching or acquiring documents.
#[derive(Error, Debug)]
pub enum SourceError {
    /// HTTP transport or status error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Fetch failure reported through a seam with a foreign error type
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Filesystem error while materializing a download
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
