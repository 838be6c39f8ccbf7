//! The per-run orchestrator

use crate::{ItemOutcome, PipelineConfig, PipelineError, RunSummary, SkippedItem};
use boletin_domain::traits::{LinkExtractor, LlmProvider, PageFetcher, TextExtractor};
use boletin_domain::{CorpusState, DocumentReference};
use boletin_enricher::Enricher;
use boletin_notify::{compose_digest, Mailer};
use boletin_report::{render_html, render_markdown};
use boletin_source::{Acquirer, Discovery};
use boletin_store::CorpusStore;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// Sequences one run: discovery, diff, per-item processing, persistence,
/// report projection, and the digest.
///
/// All external collaborators arrive through trait seams, so the whole run
/// is drivable by mocks in tests.
pub struct Pipeline<F, X, G, L, T, N> {
    discovery: Discovery<F, X>,
    acquirer: Acquirer<G>,
    enricher: Enricher<L, T>,
    store: CorpusStore,
    mailer: Option<N>,
    config: PipelineConfig,
}

impl<F, X, G, L, T, N> Pipeline<F, X, G, L, T, N>
where
    F: PageFetcher,
    F::Error: std::fmt::Display,
    X: LinkExtractor,
    G: PageFetcher,
    G::Error: std::fmt::Display,
    L: LlmProvider + Sync,
    L::Error: std::fmt::Display,
    T: TextExtractor,
    T::Error: std::fmt::Display,
    N: Mailer,
{
    /// Assemble a pipeline. `mailer` is `None` when the email transport is
    /// not configured; the digest is then skipped with a logged notice.
    pub fn new(
        discovery: Discovery<F, X>,
        acquirer: Acquirer<G>,
        enricher: Enricher<L, T>,
        store: CorpusStore,
        mailer: Option<N>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            discovery,
            acquirer,
            enricher,
            store,
            mailer,
            config,
        }
    }

    /// Execute one run.
    ///
    /// Per-item failures are collected, not propagated; state merged before
    /// any later failure is already persisted by the time reports render.
    pub async fn run(&mut self) -> Result<RunSummary, PipelineError> {
        info!(
            "run starting ({} partition(s))",
            self.config.partitions.len()
        );

        let discovered = self.discovery.discover(&self.config.partitions).await;
        let mut state = self.store.load();
        let new_refs = state.select_new(&discovered);

        info!(
            "{} reference(s) discovered, {} new",
            discovered.len(),
            new_refs.len()
        );

        let mut processed = Vec::new();
        let mut skipped = Vec::new();

        for reference in &new_refs {
            match self.process_item(reference, &mut state).await {
                ItemOutcome::Processed(record) => processed.push(record),
                ItemOutcome::Skipped(item) => skipped.push(item),
            }
        }

        self.store.save(&state)?;

        if !state.is_empty() {
            write_reports(&self.config, &state)?;
        }

        let digest_sent = self.notify(&processed);

        info!(
            "run finished: {} processed, {} skipped",
            processed.len(),
            skipped.len()
        );

        Ok(RunSummary {
            discovered: discovered.len(),
            new_items: new_refs.len(),
            processed,
            skipped,
            digest_sent,
        })
    }

    /// Acquire, enrich, and merge one reference.
    ///
    /// Acquisition failure skips this reference only; the url is noted as
    /// seen but never enters the enriched mapping, so the next run retries
    /// it. Enrichment cannot fail (it degrades), so a successful download
    /// always merges.
    async fn process_item(
        &self,
        reference: &DocumentReference,
        state: &mut CorpusState,
    ) -> ItemOutcome {
        let artifact = match self.acquirer.acquire(reference).await {
            Ok(path) => path,
            Err(e) => {
                warn!("skipping {} this run: {}", reference.url, e);
                state.note_reference(reference.clone());
                return ItemOutcome::Skipped(SkippedItem {
                    url: reference.url.clone(),
                    reason: e.to_string(),
                });
            }
        };

        let enrichment = self
            .enricher
            .enrich(
                &artifact,
                &reference.display_name,
                reference.partition.as_deref(),
                &self.config.fallback_source,
            )
            .await;

        let record = state.merge(
            reference.clone(),
            artifact.display().to_string(),
            enrichment,
        );
        ItemOutcome::Processed(record)
    }

    /// Dispatch the digest for this run's new items, if any.
    ///
    /// Returns whether a digest was handed to the transport. Missing
    /// transport configuration is a silent skip; a send failure is logged
    /// and the run continues.
    fn notify(&self, processed: &[boletin_domain::EnrichedRecord]) -> bool {
        let Some(digest) = compose_digest(processed) else {
            return false;
        };

        match &self.mailer {
            Some(mailer) => match mailer.send(&digest) {
                Ok(()) => true,
                Err(e) => {
                    error!("digest delivery failed: {}", e);
                    false
                }
            },
            None => {
                info!("email transport not configured, skipping digest");
                false
            }
        }
    }
}

/// Project the full corpus into the configured report artifacts.
///
/// Safe to call any number of times; the reports are pure functions of the
/// enriched-record mapping.
pub fn write_reports(config: &PipelineConfig, state: &CorpusState) -> Result<(), PipelineError> {
    let markdown = render_markdown(&state.enriched_records);
    write_artifact(&config.markdown_report_path, &markdown)?;

    let html = render_html(&state.enriched_records);
    write_artifact(&config.html_report_path, &html)?;

    if let Some(publish) = &config.publish_html_path {
        write_artifact(publish, &html)?;
    }

    info!(
        "reports written ({} record(s))",
        state.enriched_records.len()
    );
    Ok(())
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}
