//! Boletin Pipeline
//!
//! The per-run orchestrator: discovery → diff against the corpus →
//! sequential acquire/enrich/merge per new reference → persist → report
//! projection → digest.
//!
//! # Failure containment
//!
//! - A failed partition contributes zero references (handled in discovery).
//! - A failed acquisition skips that reference only; the url stays eligible
//!   for retry next run. The per-item loop never aborts the batch.
//! - Enrichment never fails; it degrades (handled in the adapter).
//! - Digest delivery failures are logged and do not affect the run outcome.
//! - Only state persistence and report writing are hard failures; state
//!   merged and saved before the failure is retained (no rollback).

#![warn(missing_docs)]

mod config;
mod error;
mod outcome;
mod pipeline;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use outcome::{ItemOutcome, RunSummary, SkippedItem};
pub use pipeline::{write_reports, Pipeline};
