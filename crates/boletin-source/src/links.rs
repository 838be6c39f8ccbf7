//! Attachment link extraction from index page markup

use boletin_domain::traits::LinkExtractor;
use boletin_domain::DocumentReference;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// Locates document attachment links on an index page.
///
/// The index serves documents as `/getattachment/…/<name>.aspx` links (the
/// `.aspx` container actually delivers a PDF). Relative links are resolved
/// against the page's own url.
pub struct AttachmentLinkExtractor {
    marker: String,
    suffix: String,
    anchor: Selector,
}

impl AttachmentLinkExtractor {
    /// Extractor for the default `/getattachment/…*.aspx` link shape.
    pub fn new() -> Self {
        Self::with_pattern("/getattachment/", ".aspx")
    }

    /// Extractor for a custom path marker and file suffix.
    pub fn with_pattern(marker: impl Into<String>, suffix: impl Into<String>) -> Self {
        let anchor = Selector::parse("a[href]").expect("static selector");
        Self {
            marker: marker.into(),
            suffix: suffix.into().to_lowercase(),
            anchor,
        }
    }
}

impl Default for AttachmentLinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractor for AttachmentLinkExtractor {
    fn extract(&self, html: &str, base_url: &str) -> Vec<DocumentReference> {
        let base = match Url::parse(base_url) {
            Ok(base) => base,
            Err(e) => {
                debug!("unparsable base url {}: {}", base_url, e);
                return Vec::new();
            }
        };

        let document = Html::parse_document(html);
        let mut references = Vec::new();

        for element in document.select(&self.anchor) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let href = href.trim();

            if !href.contains(&self.marker) || !href.to_lowercase().ends_with(&self.suffix) {
                continue;
            }

            match base.join(href) {
                Ok(resolved) => {
                    references.push(DocumentReference::from_url(resolved.as_str(), None));
                }
                Err(e) => {
                    debug!("skipping unresolvable link {}: {}", href, e);
                }
            }
        }

        references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.gov/normatividad/decretos/2025";

    #[test]
    fn test_extracts_matching_links() {
        let html = r#"
            <html><body>
              <a href="/getattachment/ab12/Decreto-0123.aspx">Decreto 123</a>
              <a href="https://example.gov/getattachment/cd34/Decreto-0456.aspx">Decreto 456</a>
            </body></html>
        "#;

        let extractor = AttachmentLinkExtractor::new();
        let refs = extractor.extract(html, BASE);

        assert_eq!(refs.len(), 2);
        assert_eq!(
            refs[0].url,
            "https://example.gov/getattachment/ab12/Decreto-0123.aspx"
        );
        assert_eq!(refs[0].display_name, "Decreto-0123.aspx");
        assert_eq!(
            refs[1].url,
            "https://example.gov/getattachment/cd34/Decreto-0456.aspx"
        );
    }

    #[test]
    fn test_ignores_non_attachment_links() {
        let html = r#"
            <html><body>
              <a href="/normatividad/otros">Otros</a>
              <a href="/getattachment/ab12/Decreto-0123.pdf">direct pdf</a>
              <a href="mailto:info@example.gov">correo</a>
            </body></html>
        "#;

        let refs = AttachmentLinkExtractor::new().extract(html, BASE);
        assert!(refs.is_empty());
    }

    #[test]
    fn test_suffix_match_is_case_insensitive() {
        let html = r#"<a href="/getattachment/ab12/Decreto-0123.ASPX">x</a>"#;
        let refs = AttachmentLinkExtractor::new().extract(html, BASE);
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn test_unparsable_base_yields_nothing() {
        let html = r#"<a href="/getattachment/ab12/Decreto-0123.aspx">x</a>"#;
        let refs = AttachmentLinkExtractor::new().extract(html, "not a url");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_anchors_without_href_are_skipped() {
        let html = r#"<a name="top">top</a><a href="/getattachment/a/D-1.aspx">x</a>"#;
        let refs = AttachmentLinkExtractor::new().extract(html, BASE);
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn test_custom_pattern() {
        let html = r#"<a href="/files/resolucion-9.doc">x</a>"#;
        let extractor = AttachmentLinkExtractor::with_pattern("/files/", ".doc");
        let refs = extractor.extract(html, BASE);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].display_name, "resolucion-9.doc");
    }
}
