//! Boletin Source Layer
//!
//! Discovery and acquisition against the publication index.
//!
//! # Components
//!
//! - [`HttpFetcher`]: reqwest client with browser-like headers and the
//!   page/download timeouts, implementing the `PageFetcher` seam
//! - [`AttachmentLinkExtractor`]: locates attachment links on an index page
//! - [`Discovery`]: per-partition fetch + extract + stamp, deduplicated by
//!   url with first-occurrence preference; a failed partition contributes
//!   zero references without aborting the others
//! - [`Acquirer`]: downloads one reference to a deterministic local path

#![warn(missing_docs)]

mod acquire;
mod discovery;
mod error;
mod fetch;
mod links;

pub use acquire::Acquirer;
pub use discovery::Discovery;
pub use error::SourceError;
pub use fetch::HttpFetcher;
pub use links::AttachmentLinkExtractor;
