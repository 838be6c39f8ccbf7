//! The enrichment adapter and its degradation ladder

use crate::parser::parse_enrichment;
use crate::prompt::PromptBuilder;
use boletin_domain::traits::{LlmProvider, TextExtractor};
use boletin_domain::Enrichment;
use std::path::Path;
use tracing::{debug, info, warn};

/// Placeholder summary when no service credential is configured.
pub const SUMMARY_SKIPPED_NO_CREDENTIAL: &str =
    "Resumen omitido (servicio de análisis no configurado).";

/// Placeholder summary when the artifact's text could not be extracted.
pub const SUMMARY_EXTRACTION_FAILED: &str = "No se pudo extraer el texto del documento.";

/// Placeholder summary when the artifact has no text layer.
pub const SUMMARY_NO_TEXT: &str =
    "El documento no contiene texto legible (posiblemente escaneado como imagen).";

/// Placeholder summary when the service call itself failed.
pub const SUMMARY_CALL_FAILED: &str =
    "No se pudo generar el resumen (fallo al consultar el servicio).";

/// Configuration for the enrichment adapter.
#[derive(Debug, Clone)]
pub struct EnricherConfig {
    /// Maximum characters of extracted text sent to the service.
    ///
    /// The service has an input-size budget, and cost and latency scale
    /// with input size.
    pub max_text_chars: usize,

    /// Characters of an unparsable response to log for diagnosis.
    pub raw_preview_chars: usize,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            max_text_chars: 12_000,
            raw_preview_chars: 300,
        }
    }
}

/// Produces a structured [`Enrichment`] for one acquired artifact.
///
/// Never fails: every failure mode degrades to a structurally valid result
/// with a placeholder summary, an empty theme list, and the fallback source.
pub struct Enricher<L, T> {
    provider: Option<L>,
    extractor: T,
    config: EnricherConfig,
}

impl<L, T> Enricher<L, T>
where
    L: LlmProvider + Sync,
    L::Error: std::fmt::Display,
    T: TextExtractor,
    T::Error: std::fmt::Display,
{
    /// Create an enricher. `provider` is `None` when no service credential
    /// is configured; enrichment is then skipped with a placeholder.
    pub fn new(provider: Option<L>, extractor: T, config: EnricherConfig) -> Self {
        Self {
            provider,
            extractor,
            config,
        }
    }

    /// Enrich one artifact. Infallible; see the crate docs for the ladder.
    pub async fn enrich(
        &self,
        artifact: &Path,
        title: &str,
        partition: Option<&str>,
        fallback_source: &str,
    ) -> Enrichment {
        let Some(provider) = &self.provider else {
            return degraded(SUMMARY_SKIPPED_NO_CREDENTIAL, fallback_source);
        };

        let text = match self.extractor.extract_text(artifact) {
            Ok(text) => text,
            Err(e) => {
                warn!("text extraction failed for {}: {}", artifact.display(), e);
                return degraded(SUMMARY_EXTRACTION_FAILED, fallback_source);
            }
        };

        if text.trim().is_empty() {
            return degraded(SUMMARY_NO_TEXT, fallback_source);
        }

        let (text, truncated) = truncate_chars(text, self.config.max_text_chars);
        if truncated {
            debug!(
                "text for {} truncated to {} chars",
                title, self.config.max_text_chars
            );
        }

        let mut prompt = PromptBuilder::new(text, title, fallback_source).truncated(truncated);
        if let Some(partition) = partition {
            prompt = prompt.with_partition(partition);
        }
        let prompt = prompt.build();

        info!("requesting summary for {}", title);
        let response = match provider.generate(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                warn!("understanding service call failed for {}: {}", title, e);
                return degraded(SUMMARY_CALL_FAILED, fallback_source);
            }
        };

        match parse_enrichment(&response, fallback_source) {
            Ok(enrichment) => enrichment,
            Err(e) => {
                let preview: String = response
                    .chars()
                    .take(self.config.raw_preview_chars)
                    .collect();
                warn!(
                    "unparsable service response for {} ({}); raw: {}",
                    title, e, preview
                );

                let raw = response.trim();
                // An empty response would otherwise yield an empty summary.
                let summary = if raw.is_empty() {
                    SUMMARY_CALL_FAILED.to_string()
                } else {
                    raw.to_string()
                };
                Enrichment {
                    summary,
                    themes: Vec::new(),
                    source: fallback_source.to_string(),
                }
            }
        }
    }
}

fn degraded(summary: &str, fallback_source: &str) -> Enrichment {
    Enrichment {
        summary: summary.to_string(),
        themes: Vec::new(),
        source: fallback_source.to_string(),
    }
}

/// Truncate to at most `max` characters, reporting whether anything was cut.
fn truncate_chars(text: String, max: usize) -> (String, bool) {
    if text.chars().count() <= max {
        (text, false)
    } else {
        (text.chars().take(max).collect(), true)
    }
}
