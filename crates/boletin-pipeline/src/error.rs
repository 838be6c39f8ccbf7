//! Error types for the orchestrator

use thiserror::Error;

/// Errors that abort a run.
///
/// Everything else in the pipeline is contained per partition or per item;
/// only failures to persist state or write the report artifacts surface here.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Corpus state could not be persisted
    #[error("State error: {0}")]
    Store(#[from] boletin_store::StoreError),

    /// A report artifact could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
