//! Pipeline configuration
//!
//! One explicit value object constructed at process start and passed into
//! the components; no ambient or global mutable state.

use std::path::PathBuf;

/// Configuration for one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Partitions (e.g. years) to monitor
    pub partitions: Vec<String>,

    /// Index url template with a `{partition}` placeholder
    pub index_url_template: String,

    /// Directory acquired documents are written to
    pub download_dir: PathBuf,

    /// Directory holding the durable state files
    pub state_dir: PathBuf,

    /// Output path of the narrative markdown report
    pub markdown_report_path: PathBuf,

    /// Output path of the browsable HTML report
    pub html_report_path: PathBuf,

    /// Optional second copy of the HTML report (e.g. `docs/index.html`)
    pub publish_html_path: Option<PathBuf>,

    /// Issuing entity attributed when enrichment cannot determine one
    pub fallback_source: String,

    /// Optional path the last fetched index page is mirrored to
    pub debug_snapshot_path: Option<PathBuf>,
}

impl PipelineConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.partitions.is_empty() {
            return Err("at least one partition must be configured".to_string());
        }
        if !self.index_url_template.contains("{partition}") {
            return Err("index_url_template must contain the {partition} placeholder".to_string());
        }
        if self.fallback_source.trim().is_empty() {
            return Err("fallback_source must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            partitions: vec!["2025".to_string()],
            index_url_template: "https://www.mincit.gov.co/normatividad/decretos/{partition}"
                .to_string(),
            download_dir: PathBuf::from("downloads"),
            state_dir: PathBuf::from("state"),
            markdown_report_path: PathBuf::from("report.md"),
            html_report_path: PathBuf::from("report.html"),
            publish_html_path: Some(PathBuf::from("docs/index.html")),
            fallback_source: "Ministerio de Comercio, Industria y Turismo".to_string(),
            debug_snapshot_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_partitions_invalid() {
        let config = PipelineConfig {
            partitions: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_template_without_placeholder_invalid() {
        let config = PipelineConfig {
            index_url_template: "https://example.gov/decretos/2025".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_fallback_source_invalid() {
        let config = PipelineConfig {
            fallback_source: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
