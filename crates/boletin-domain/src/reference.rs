//! Document references - the identity of one discoverable document

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identity and location of one discoverable document.
///
/// The `url` is the sole identity: two references with the same url are the
/// same document, even when discovered under different partitions in the same
/// run (first occurrence wins, see [`dedup_first_by_url`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    /// Absolute url of the document; stable across runs
    pub url: String,

    /// Human-facing name, also used to derive the local artifact name
    pub display_name: String,

    /// Partition (e.g. the year) this reference was discovered under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
}

impl DocumentReference {
    /// Create a reference with an explicit display name.
    pub fn new(
        url: impl Into<String>,
        display_name: impl Into<String>,
        partition: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            display_name: display_name.into(),
            partition,
        }
    }

    /// Create a reference deriving the display name from the url's last
    /// path segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use boletin_domain::DocumentReference;
    ///
    /// let r = DocumentReference::from_url(
    ///     "https://example.gov/getattachment/ab12/Decreto-0123.aspx",
    ///     None,
    /// );
    /// assert_eq!(r.display_name, "Decreto-0123.aspx");
    /// ```
    pub fn from_url(url: impl Into<String>, partition: Option<String>) -> Self {
        let url = url.into();
        let display_name = display_name_for(&url);
        Self {
            url,
            display_name,
            partition,
        }
    }

    /// Return a copy of this reference stamped with the given partition.
    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }
}

/// Derive a display name from a url: the last non-empty path segment, or the
/// whole url when there is none.
fn display_name_for(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(url)
        .to_string()
}

/// Deduplicate references by url, keeping the first occurrence.
///
/// Input order is preserved, so discovery order (partition order, then
/// first-seen order within a partition) survives deduplication.
pub fn dedup_first_by_url(references: Vec<DocumentReference>) -> Vec<DocumentReference> {
    let mut seen = HashSet::new();
    references
        .into_iter()
        .filter(|r| seen.insert(r.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_url() {
        let r = DocumentReference::from_url("https://x/getattachment/a/Decreto-1.aspx", None);
        assert_eq!(r.display_name, "Decreto-1.aspx");
    }

    #[test]
    fn test_display_name_trailing_slash() {
        let r = DocumentReference::from_url("https://x/docs/Decreto-2.aspx/", None);
        assert_eq!(r.display_name, "Decreto-2.aspx");
    }

    #[test]
    fn test_display_name_degenerate_url() {
        let r = DocumentReference::from_url("https://", None);
        assert_eq!(r.display_name, "https:");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let refs = vec![
            DocumentReference::from_url("https://x/a.aspx", Some("2024".into())),
            DocumentReference::from_url("https://x/b.aspx", Some("2024".into())),
            DocumentReference::from_url("https://x/a.aspx", Some("2025".into())),
        ];

        let deduped = dedup_first_by_url(refs);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].url, "https://x/a.aspx");
        // First-seen partition retained
        assert_eq!(deduped[0].partition.as_deref(), Some("2024"));
        assert_eq!(deduped[1].url, "https://x/b.aspx");
    }

    #[test]
    fn test_dedup_preserves_order() {
        let refs = vec![
            DocumentReference::from_url("https://x/c.aspx", None),
            DocumentReference::from_url("https://x/a.aspx", None),
            DocumentReference::from_url("https://x/b.aspx", None),
        ];

        let deduped = dedup_first_by_url(refs);
        let urls: Vec<_> = deduped.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, ["https://x/c.aspx", "https://x/a.aspx", "https://x/b.aspx"]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let r = DocumentReference::new("https://x/a.aspx", "a.aspx", Some("2025".into()));
        let json = serde_json::to_string(&r).unwrap();
        let back: DocumentReference = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn test_partition_absent_in_json_when_none() {
        let r = DocumentReference::from_url("https://x/a.aspx", None);
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("partition"));
    }
}
