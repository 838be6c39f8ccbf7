//! Per-item and per-run result types
//!
//! The orchestrator's loop inspects explicit outcomes instead of using
//! errors as control flow, so one bad document never aborts the batch.

use boletin_domain::EnrichedRecord;

/// What happened to one new reference during a run.
#[derive(Debug, Clone)]
pub enum ItemOutcome {
    /// Acquired, enriched (possibly degraded), and merged into the corpus
    Processed(EnrichedRecord),

    /// Acquisition failed; the reference stays eligible for retry next run
    Skipped(SkippedItem),
}

/// A reference skipped in this run.
#[derive(Debug, Clone)]
pub struct SkippedItem {
    /// Url of the skipped reference
    pub url: String,

    /// Why it was skipped
    pub reason: String,
}

/// Aggregate result of one run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// References discovered across all partitions (after dedup)
    pub discovered: usize,

    /// References selected as new by the diff
    pub new_items: usize,

    /// Records merged into the corpus this run
    pub processed: Vec<EnrichedRecord>,

    /// References skipped this run
    pub skipped: Vec<SkippedItem>,

    /// Whether a digest was handed to the transport
    pub digest_sent: bool,
}

impl RunSummary {
    /// True when this run changed nothing.
    pub fn is_noop(&self) -> bool {
        self.processed.is_empty() && self.skipped.is_empty()
    }
}
