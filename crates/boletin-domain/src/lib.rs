//! Boletin Domain Layer
//!
//! Core entities and trait seams for the publication-watch pipeline.
//! Everything the pipeline persists or passes across a component boundary is
//! defined here with a fixed, validated field set.
//!
//! ## Key Concepts
//!
//! - **DocumentReference**: identity + location of one discoverable document;
//!   the `url` is the sole identity across runs
//! - **EnrichedRecord**: the durable, merged result for one reference
//! - **Enrichment**: the structured output of the understanding service
//!   (summary, themes, source), possibly degraded
//! - **CorpusState**: the two url-keyed mappings that survive restarts, plus
//!   the pure diff/merge operations over them
//!
//! ## Architecture
//!
//! This crate holds no infrastructure: no HTTP, no filesystem, no service
//! clients. Those live behind the traits in [`traits`] and are implemented by
//! the infrastructure crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod record;
pub mod reference;
pub mod traits;

// Re-exports for convenience
pub use corpus::CorpusState;
pub use record::{EnrichedRecord, Enrichment};
pub use reference::{dedup_first_by_url, DocumentReference};
