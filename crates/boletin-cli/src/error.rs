//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// HTTP client setup error
    #[error("Source error: {0}")]
    Source(#[from] boletin_source::SourceError),

    /// Understanding-service client setup error
    #[error("Service error: {0}")]
    Llm(#[from] boletin_llm::LlmError),

    /// Pipeline run error
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] boletin_pipeline::PipelineError),
}
