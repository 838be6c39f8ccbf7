//! Document acquisition - materializing a reference's bytes locally

use crate::SourceError;
use boletin_domain::traits::PageFetcher;
use boletin_domain::DocumentReference;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Downloads a reference's bytes to a deterministic local path.
///
/// The index serves documents under an `.aspx` container extension; the
/// local file name rewrites that to `.pdf`, the true content type.
pub struct Acquirer<F> {
    fetcher: F,
    download_dir: PathBuf,
}

impl<F> Acquirer<F>
where
    F: PageFetcher,
    F::Error: std::fmt::Display,
{
    /// Create an acquirer writing into `download_dir`.
    pub fn new(fetcher: F, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            download_dir: download_dir.into(),
        }
    }

    /// Local file name for a reference, with the container extension
    /// normalized.
    pub fn local_file_name(reference: &DocumentReference) -> String {
        let name = &reference.display_name;
        if name.to_lowercase().ends_with(".aspx") {
            format!("{}.pdf", &name[..name.len() - ".aspx".len()])
        } else {
            name.clone()
        }
    }

    /// Fetch the reference's bytes and write them under the download
    /// directory, returning the local path.
    ///
    /// Failures are per-reference: the caller skips this reference and the
    /// url stays eligible for retry on the next run.
    pub async fn acquire(&self, reference: &DocumentReference) -> Result<PathBuf, SourceError> {
        fs::create_dir_all(&self.download_dir)?;

        let dest = self.download_dir.join(Self::local_file_name(reference));

        let bytes = self
            .fetcher
            .fetch_bytes(&reference.url)
            .await
            .map_err(|e| {
                warn!("download failed for {}: {}", reference.url, e);
                SourceError::Fetch(e.to_string())
            })?;

        fs::write(&dest, &bytes)?;
        info!(
            "downloaded {} -> {} ({} bytes)",
            reference.url,
            dest.display(),
            bytes.len()
        );

        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct BytesFetcher {
        payload: Option<Vec<u8>>,
    }

    #[async_trait]
    impl PageFetcher for BytesFetcher {
        type Error = String;

        async fn fetch_text(&self, _url: &str) -> Result<String, Self::Error> {
            Err("not used".to_string())
        }

        async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, Self::Error> {
            self.payload
                .clone()
                .ok_or_else(|| format!("download failed for {}", url))
        }
    }

    fn reference() -> DocumentReference {
        DocumentReference::from_url(
            "https://example.gov/getattachment/a/Decreto-1.aspx",
            Some("2025".into()),
        )
    }

    #[test]
    fn test_local_file_name_rewrites_container_extension() {
        assert_eq!(Acquirer::<BytesFetcher>::local_file_name(&reference()), "Decreto-1.pdf");
    }

    #[test]
    fn test_local_file_name_rewrite_is_case_insensitive() {
        let r = DocumentReference::from_url("https://x/Decreto-2.ASPX", None);
        assert_eq!(Acquirer::<BytesFetcher>::local_file_name(&r), "Decreto-2.pdf");
    }

    #[test]
    fn test_local_file_name_keeps_other_extensions() {
        let r = DocumentReference::from_url("https://x/informe.pdf", None);
        assert_eq!(Acquirer::<BytesFetcher>::local_file_name(&r), "informe.pdf");
    }

    #[tokio::test]
    async fn test_acquire_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let acquirer = Acquirer::new(
            BytesFetcher {
                payload: Some(b"%PDF-1.4 fake".to_vec()),
            },
            dir.path().join("downloads"),
        );

        let path = acquirer.acquire(&reference()).await.unwrap();
        assert!(path.ends_with("Decreto-1.pdf"));
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4 fake");
    }

    #[tokio::test]
    async fn test_acquire_failure_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let downloads = dir.path().join("downloads");
        let acquirer = Acquirer::new(BytesFetcher { payload: None }, &downloads);

        let result = acquirer.acquire(&reference()).await;
        assert!(matches!(result, Err(SourceError::Fetch(_))));
        assert!(!downloads.join("Decreto-1.pdf").exists());
    }
}
