//! Trait definitions for external collaborators
//!
//! These traits mark the seams between the pipeline and the outside world.
//! Infrastructure implementations live in other crates; tests substitute
//! deterministic mocks.

use crate::DocumentReference;
use async_trait::async_trait;
use std::path::Path;

/// Retrieves remote content over HTTP.
///
/// Implemented by the infrastructure layer (boletin-source).
#[async_trait]
pub trait PageFetcher {
    /// Error type for fetch operations
    type Error;

    /// Fetch a page as text (index pages)
    async fn fetch_text(&self, url: &str) -> Result<String, Self::Error>;

    /// Fetch raw bytes (document downloads)
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, Self::Error>;
}

/// Locates candidate document references in raw markup.
///
/// Implementations return references without a partition; discovery stamps
/// the partition each index page was fetched under.
pub trait LinkExtractor {
    /// Extract candidate references from `html`, resolving relative links
    /// against `base_url`.
    fn extract(&self, html: &str, base_url: &str) -> Vec<DocumentReference>;
}

/// Turns an acquired artifact into plain text.
///
/// Implemented by the enrichment layer (boletin-enricher).
pub trait TextExtractor {
    /// Error type for extraction operations
    type Error;

    /// Extract the full text of the artifact at `path`.
    fn extract_text(&self, path: &Path) -> Result<String, Self::Error>;
}

/// Generates text from the external understanding service.
///
/// Implemented by the infrastructure layer (boletin-llm).
#[async_trait]
pub trait LlmProvider {
    /// Error type for service operations
    type Error;

    /// Generate a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
