//! PDF byte-to-text extraction

use boletin_domain::traits::TextExtractor;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while extracting text from an artifact.
#[derive(Error, Debug)]
pub enum TextError {
    /// The PDF could not be parsed or rendered to text
    #[error("PDF extraction failed: {0}")]
    Extraction(String),
}

/// Extracts the text layer of a PDF artifact.
///
/// A structurally valid PDF with no text layer (a scanned image) extracts to
/// an empty string, which the enricher treats as its own degradation rung.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a PDF text extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    type Error = TextError;

    fn extract_text(&self, path: &Path) -> Result<String, Self::Error> {
        debug!("extracting text from {}", path.display());
        pdf_extract::extract_text(path)
            .map(|text| text.trim().to_string())
            .map_err(|e| TextError::Extraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_is_an_error() {
        let result = PdfTextExtractor::new().extract_text(Path::new("/no/such/file.pdf"));
        assert!(matches!(result, Err(TextError::Extraction(_))));
    }

    #[test]
    fn test_non_pdf_bytes_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-pdf.pdf");
        fs::write(&path, b"<html>definitely not a pdf</html>").unwrap();

        let result = PdfTextExtractor::new().extract_text(&path);
        assert!(matches!(result, Err(TextError::Extraction(_))));
    }
}
