//! Corpus state - the two durable url-keyed mappings and the pure
//! diff/merge operations over them

use crate::{DocumentReference, EnrichedRecord, Enrichment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full accumulated state of the pipeline across runs.
///
/// Two mappings, both keyed by url:
///
/// - `known_references`: every reference ever discovered
/// - `enriched_records`: every reference that completed enrichment
///
/// The intended steady state is `enriched_records.keys() ⊆
/// known_references.keys()`; a url known but not yet enriched is a
/// recoverable gap left by an interrupted run, not an error.
///
/// `BTreeMap` keeps the serialized files in a stable, diffable order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusState {
    /// url → reference, for every reference ever discovered
    pub known_references: BTreeMap<String, DocumentReference>,

    /// url → merged result, for every reference that completed enrichment
    pub enriched_records: BTreeMap<String, EnrichedRecord>,
}

impl CorpusState {
    /// Create an empty corpus (first run).
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the references that still need processing.
    ///
    /// This is the idempotency boundary: a reference is "new" exactly when
    /// its url is not a key of `enriched_records`. References that failed
    /// before completing enrichment are selected again; references that
    /// completed never are. Discovery order is preserved.
    pub fn select_new(&self, discovered: &[DocumentReference]) -> Vec<DocumentReference> {
        discovered
            .iter()
            .filter(|r| !self.enriched_records.contains_key(&r.url))
            .cloned()
            .collect()
    }

    /// Fold one enrichment result into the corpus.
    ///
    /// Pure upsert into both mappings; returns the stored record. Safe to
    /// re-run for the same url, though in normal operation the diff step
    /// guarantees merges only happen for urls without a record.
    pub fn merge(
        &mut self,
        reference: DocumentReference,
        local_artifact_path: impl Into<String>,
        enrichment: Enrichment,
    ) -> EnrichedRecord {
        let record = EnrichedRecord::from_parts(&reference, local_artifact_path, enrichment);
        self.enriched_records
            .insert(record.url.clone(), record.clone());
        self.known_references.insert(reference.url.clone(), reference);
        record
    }

    /// Record a reference as seen without enriching it.
    ///
    /// Used when acquisition fails: the url stays eligible for retry on the
    /// next run because it never enters `enriched_records`.
    pub fn note_reference(&mut self, reference: DocumentReference) {
        self.known_references
            .entry(reference.url.clone())
            .or_insert(reference);
    }

    /// True when no reference has ever completed enrichment.
    pub fn is_empty(&self) -> bool {
        self.enriched_records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(url: &str) -> DocumentReference {
        DocumentReference::from_url(url, Some("2025".into()))
    }

    fn enrichment() -> Enrichment {
        Enrichment {
            summary: "Resumen".into(),
            themes: vec![],
            source: "MinCIT".into(),
        }
    }

    #[test]
    fn test_select_new_on_empty_corpus() {
        let corpus = CorpusState::new();
        let discovered = vec![reference("https://x/a.aspx"), reference("https://x/b.aspx")];

        let fresh = corpus.select_new(&discovered);
        assert_eq!(fresh.len(), 2);
    }

    #[test]
    fn test_select_new_skips_enriched() {
        let mut corpus = CorpusState::new();
        corpus.merge(reference("https://x/a.aspx"), "downloads/a.pdf", enrichment());

        let discovered = vec![reference("https://x/a.aspx"), reference("https://x/b.aspx")];
        let fresh = corpus.select_new(&discovered);

        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].url, "https://x/b.aspx");
    }

    #[test]
    fn test_select_new_retries_known_but_unenriched() {
        // A url noted (e.g. acquisition failed last run) but never enriched
        // must be selected again.
        let mut corpus = CorpusState::new();
        corpus.note_reference(reference("https://x/a.aspx"));

        let discovered = vec![reference("https://x/a.aspx")];
        let fresh = corpus.select_new(&discovered);
        assert_eq!(fresh.len(), 1);
    }

    #[test]
    fn test_select_new_preserves_discovery_order() {
        let corpus = CorpusState::new();
        let discovered = vec![
            reference("https://x/c.aspx"),
            reference("https://x/a.aspx"),
            reference("https://x/b.aspx"),
        ];

        let urls: Vec<_> = corpus
            .select_new(&discovered)
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(urls, ["https://x/c.aspx", "https://x/a.aspx", "https://x/b.aspx"]);
    }

    #[test]
    fn test_merge_updates_both_mappings() {
        let mut corpus = CorpusState::new();
        let record = corpus.merge(reference("https://x/a.aspx"), "downloads/a.pdf", enrichment());

        assert_eq!(record.url, "https://x/a.aspx");
        assert!(corpus.known_references.contains_key("https://x/a.aspx"));
        assert!(corpus.enriched_records.contains_key("https://x/a.aspx"));
    }

    #[test]
    fn test_enriched_keys_subset_of_known() {
        let mut corpus = CorpusState::new();
        corpus.merge(reference("https://x/a.aspx"), "downloads/a.pdf", enrichment());
        corpus.merge(reference("https://x/b.aspx"), "downloads/b.pdf", enrichment());
        corpus.note_reference(reference("https://x/c.aspx"));

        for url in corpus.enriched_records.keys() {
            assert!(corpus.known_references.contains_key(url));
        }
        assert_eq!(corpus.known_references.len(), 3);
        assert_eq!(corpus.enriched_records.len(), 2);
    }

    #[test]
    fn test_note_reference_keeps_first_seen() {
        let mut corpus = CorpusState::new();
        corpus.note_reference(reference("https://x/a.aspx"));
        corpus.note_reference(DocumentReference::from_url(
            "https://x/a.aspx",
            Some("2024".into()),
        ));

        let stored = &corpus.known_references["https://x/a.aspx"];
        assert_eq!(stored.partition.as_deref(), Some("2025"));
    }

    #[test]
    fn test_is_empty_tracks_enriched_records() {
        let mut corpus = CorpusState::new();
        assert!(corpus.is_empty());

        corpus.note_reference(reference("https://x/a.aspx"));
        assert!(corpus.is_empty());

        corpus.merge(reference("https://x/a.aspx"), "downloads/a.pdf", enrichment());
        assert!(!corpus.is_empty());
    }
}
