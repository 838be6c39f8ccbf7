//! Boletin Enrichment Adapter
//!
//! Turns an acquired document into a structured [`Enrichment`] (summary,
//! themes, source) via the external understanding service.
//!
//! # Degradation ladder
//!
//! Every failure mode yields a usable, clearly-labeled result instead of an
//! error; [`Enricher::enrich`] never fails:
//!
//! 1. no service credential configured → "skipped" placeholder
//! 2. text extraction failed → placeholder, cause logged
//! 3. no legible text (scanned image) → placeholder
//! 4. text truncated to a fixed budget before the service call
//! 5. service call failed → placeholder, cause logged
//! 6. unparsable response → raw response text as the summary, first 300
//!    chars logged for diagnosis
//!
//! [`Enrichment`]: boletin_domain::Enrichment

#![warn(missing_docs)]

mod enricher;
mod parser;
mod prompt;
mod text;

pub use enricher::{
    Enricher, EnricherConfig, SUMMARY_CALL_FAILED, SUMMARY_EXTRACTION_FAILED, SUMMARY_NO_TEXT,
    SUMMARY_SKIPPED_NO_CREDENTIAL,
};
pub use parser::{parse_enrichment, ParseError};
pub use prompt::PromptBuilder;
pub use text::{PdfTextExtractor, TextError};
