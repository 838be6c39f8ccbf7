//! Per-partition discovery of candidate references

use boletin_domain::traits::{LinkExtractor, PageFetcher};
use boletin_domain::{dedup_first_by_url, DocumentReference};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Placeholder substituted by the partition value in the index url template.
pub const PARTITION_PLACEHOLDER: &str = "{partition}";

/// Turns partition identifiers into a deduplicated set of candidate
/// references.
///
/// Each partition's index page is fetched and scanned independently: a
/// partition whose page cannot be fetched contributes zero references and is
/// logged, without aborting discovery for the remaining partitions.
pub struct Discovery<F, X> {
    fetcher: F,
    extractor: X,
    index_url_template: String,
    snapshot_path: Option<PathBuf>,
}

impl<F, X> Discovery<F, X>
where
    F: PageFetcher,
    F::Error: std::fmt::Display,
    X: LinkExtractor,
{
    /// Create a discovery stage over the given fetcher and extractor.
    ///
    /// `index_url_template` must contain the `{partition}` placeholder, e.g.
    /// `https://example.gov/normatividad/decretos/{partition}`.
    pub fn new(fetcher: F, extractor: X, index_url_template: impl Into<String>) -> Self {
        Self {
            fetcher,
            extractor,
            index_url_template: index_url_template.into(),
            snapshot_path: None,
        }
    }

    /// Also write each fetched index page to `path` for offline inspection.
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Index page url for one partition.
    pub fn index_url(&self, partition: &str) -> String {
        self.index_url_template
            .replace(PARTITION_PLACEHOLDER, partition)
    }

    /// Discover candidate references across all partitions.
    ///
    /// Output is deduplicated by url with the first occurrence winning, so a
    /// document listed under two partitions keeps its first-seen partition.
    pub async fn discover(&self, partitions: &[String]) -> Vec<DocumentReference> {
        let mut all = Vec::new();

        for partition in partitions {
            let url = self.index_url(partition);

            let html = match self.fetcher.fetch_text(&url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("index fetch failed for partition {}: {}", partition, e);
                    continue;
                }
            };

            if let Some(path) = &self.snapshot_path {
                if let Err(e) = fs::write(path, &html) {
                    warn!("could not write index snapshot {}: {}", path.display(), e);
                }
            }

            let found = self.extractor.extract(&html, &url);
            debug!(
                "partition {} contributed {} candidate reference(s)",
                partition,
                found.len()
            );

            all.extend(
                found
                    .into_iter()
                    .map(|r| r.with_partition(partition.clone())),
            );
        }

        dedup_first_by_url(all)
    }
}
