//! Enriched records - the durable result of processing one reference

use crate::DocumentReference;
use serde::{Deserialize, Serialize};

/// Structured output of the understanding service for one document.
///
/// Always structurally valid: when a step of the enrichment ladder cannot
/// complete, the adapter substitutes a placeholder summary and the fallback
/// source rather than failing, so every field here is usable downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    /// Free-text synopsis; a labeled placeholder when enrichment degraded
    pub summary: String,

    /// Short thematic labels; may be empty
    pub themes: Vec<String>,

    /// Attributed issuing entity; the configured fallback when unknown
    pub source: String,
}

/// The durable, merged result for one [`DocumentReference`].
///
/// Exactly one record exists per url; once created it is never re-created by
/// a later run (the diff step only selects urls without a record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// Url of the originating reference (same identity rule)
    pub url: String,

    /// Human-facing name carried over from the reference
    pub display_name: String,

    /// Where the acquired bytes were stored; advisory only
    pub local_artifact_path: String,

    /// Synopsis from the understanding service, or a degradation placeholder
    pub summary: String,

    /// Thematic labels; may be empty
    pub themes: Vec<String>,

    /// Attributed issuing entity
    pub source: String,

    /// Partition the reference was discovered under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
}

impl EnrichedRecord {
    /// Assemble a record from a reference, the local artifact path, and the
    /// enrichment result.
    pub fn from_parts(
        reference: &DocumentReference,
        local_artifact_path: impl Into<String>,
        enrichment: Enrichment,
    ) -> Self {
        Self {
            url: reference.url.clone(),
            display_name: reference.display_name.clone(),
            local_artifact_path: local_artifact_path.into(),
            summary: enrichment.summary,
            themes: enrichment.themes,
            source: enrichment.source,
            partition: reference.partition.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DocumentReference {
        DocumentReference::new("https://x/a.aspx", "a.aspx", Some("2025".into()))
    }

    #[test]
    fn test_from_parts_carries_reference_fields() {
        let enrichment = Enrichment {
            summary: "Resumen".into(),
            themes: vec!["comercio".into()],
            source: "MinCIT".into(),
        };

        let record = EnrichedRecord::from_parts(&reference(), "downloads/a.pdf", enrichment);
        assert_eq!(record.url, "https://x/a.aspx");
        assert_eq!(record.display_name, "a.aspx");
        assert_eq!(record.local_artifact_path, "downloads/a.pdf");
        assert_eq!(record.partition.as_deref(), Some("2025"));
        assert_eq!(record.themes, vec!["comercio".to_string()]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let record = EnrichedRecord::from_parts(
            &reference(),
            "downloads/a.pdf",
            Enrichment {
                summary: "Resumen".into(),
                themes: vec![],
                source: "MinCIT".into(),
            },
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: EnrichedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
