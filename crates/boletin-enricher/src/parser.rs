//! Parse the understanding service's response into an enrichment
//!
//! The service is instructed to answer with a bare JSON object, but models
//! routinely wrap it in prose or a markdown fence. The parser tolerates that
//! by taking the span from the first `{` to the last `}` before parsing.
//! A response with no parsable object is the caller's signal to fall back to
//! the raw text as the summary.

use boletin_domain::Enrichment;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while parsing a service response.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The response contains no `{`...`}` span
    #[error("no JSON object in response")]
    NoJsonObject,

    /// The located span is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(String),

    /// The object parsed but carried no usable summary
    #[error("parsed object has no usable 'summary'")]
    MissingSummary,
}

/// Parse a service response into an [`Enrichment`].
///
/// Field coercion: `summary` must be a non-empty string (trimmed); `themes`
/// becomes the list of trimmed non-empty string entries, empty when absent
/// or malformed; `source` is trimmed, with `fallback_source` substituted
/// when absent or empty.
pub fn parse_enrichment(response: &str, fallback_source: &str) -> Result<Enrichment, ParseError> {
    let span = extract_json_span(response).ok_or(ParseError::NoJsonObject)?;

    let value: Value = serde_json::from_str(span).map_err(|e| ParseError::Json(e.to_string()))?;

    let summary = value
        .get("summary")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::MissingSummary)?
        .to_string();

    let themes = value
        .get("themes")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let source = value
        .get("source")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback_source)
        .to_string();

    Ok(Enrichment {
        summary,
        themes,
        source,
    })
}

/// The span from the first `{` to the last `}`, if any.
fn extract_json_span(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if start < end {
        Some(&response[start..=end])
    } else {
        None
    }
}
