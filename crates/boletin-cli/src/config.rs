//! Configuration management for the CLI.
//!
//! Settings come from a TOML file (`boletin.toml` by default) with
//! environment variables overriding the secrets, so credentials can stay in
//! `.env` while everything else is committed.

use crate::error::Result;
use boletin_llm::OpenAiProvider;
use boletin_notify::MailerConfig;
use boletin_pipeline::PipelineConfig;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level file configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    /// Partitions (e.g. years) to monitor
    #[serde(default = "default_partitions")]
    pub partitions: Vec<String>,

    /// Index url template with a `{partition}` placeholder
    #[serde(default = "default_index_url_template")]
    pub index_url_template: String,

    /// Directory acquired documents are written to
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,

    /// Directory holding the durable state files
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,

    /// Issuing entity attributed when enrichment cannot determine one
    #[serde(default = "default_fallback_source")]
    pub fallback_source: String,

    /// Append-only diagnostic log path
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,

    /// Optional path the last fetched index page is mirrored to
    #[serde(default)]
    pub debug_snapshot_path: Option<PathBuf>,

    /// Report output locations
    #[serde(default)]
    pub report: ReportConfig,

    /// Understanding-service settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Email transport settings
    #[serde(default)]
    pub smtp: SmtpConfig,
}

/// Report output locations.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Narrative markdown report path
    #[serde(default = "default_markdown_path")]
    pub markdown_path: PathBuf,

    /// Browsable HTML report path
    #[serde(default = "default_html_path")]
    pub html_path: PathBuf,

    /// Optional second copy of the HTML report (e.g. `docs/index.html`)
    #[serde(default)]
    pub publish_html_path: Option<PathBuf>,
}

/// Understanding-service settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmConfig {
    /// API credential; usually supplied via environment instead
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name
    #[serde(default)]
    pub model: Option<String>,

    /// API base url
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Email transport settings; any missing field disables delivery.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SmtpConfig {
    /// SMTP host
    #[serde(default)]
    pub host: Option<String>,

    /// SMTP port
    #[serde(default)]
    pub port: Option<u16>,

    /// Login user
    #[serde(default)]
    pub username: Option<String>,

    /// Login password; usually supplied via environment instead
    #[serde(default)]
    pub password: Option<String>,

    /// Sender address
    #[serde(default)]
    pub from: Option<String>,

    /// Comma-separated recipient addresses
    #[serde(default)]
    pub to: Option<String>,
}

impl FileConfig {
    /// Load configuration from `path`, or the defaults when the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment overrides for the secrets and transport settings.
    ///
    /// Recognized variables: `BOLETIN_API_KEY` (or `OPENAI_API_KEY`),
    /// `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASSWORD`,
    /// `EMAIL_FROM`, `EMAIL_TO`.
    pub fn apply_env(&mut self) {
        if let Some(key) = non_empty_env("BOLETIN_API_KEY").or_else(|| non_empty_env("OPENAI_API_KEY")) {
            self.llm.api_key = Some(key);
        }
        if let Some(host) = non_empty_env("SMTP_HOST") {
            self.smtp.host = Some(host);
        }
        if let Some(port) = non_empty_env("SMTP_PORT").and_then(|p| p.parse().ok()) {
            self.smtp.port = Some(port);
        }
        if let Some(user) = non_empty_env("SMTP_USER") {
            self.smtp.username = Some(user);
        }
        if let Some(password) = non_empty_env("SMTP_PASSWORD") {
            self.smtp.password = Some(password);
        }
        if let Some(from) = non_empty_env("EMAIL_FROM") {
            self.smtp.from = Some(from);
        }
        if let Some(to) = non_empty_env("EMAIL_TO") {
            self.smtp.to = Some(to);
        }
    }

    /// The pipeline configuration value object.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            partitions: self.partitions.clone(),
            index_url_template: self.index_url_template.clone(),
            download_dir: self.download_dir.clone(),
            state_dir: self.state_dir.clone(),
            markdown_report_path: self.report.markdown_path.clone(),
            html_report_path: self.report.html_path.clone(),
            publish_html_path: self.report.publish_html_path.clone(),
            fallback_source: self.fallback_source.clone(),
            debug_snapshot_path: self.debug_snapshot_path.clone(),
        }
    }

    /// Build the understanding-service client, or `None` when no credential
    /// is configured (summaries are then skipped with a placeholder).
    pub fn llm_provider(&self) -> Result<Option<OpenAiProvider>> {
        let Some(api_key) = self.llm.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            return Ok(None);
        };

        let provider = OpenAiProvider::with_settings(
            api_key,
            self.llm
                .base_url
                .as_deref()
                .unwrap_or(boletin_llm::openai::DEFAULT_BASE_URL),
            self.llm
                .model
                .as_deref()
                .unwrap_or(boletin_llm::openai::DEFAULT_MODEL),
            Duration::from_secs(
                self.llm
                    .timeout_secs
                    .unwrap_or(boletin_llm::openai::DEFAULT_TIMEOUT_SECS),
            ),
        )?;
        Ok(Some(provider))
    }

    /// The raw email transport configuration.
    pub fn mailer_config(&self) -> MailerConfig {
        MailerConfig {
            host: self.smtp.host.clone(),
            port: self.smtp.port,
            username: self.smtp.username.clone(),
            password: self.smtp.password.clone(),
            from: self.smtp.from.clone(),
            to: self.smtp.to.clone(),
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            partitions: default_partitions(),
            index_url_template: default_index_url_template(),
            download_dir: default_download_dir(),
            state_dir: default_state_dir(),
            fallback_source: default_fallback_source(),
            log_path: default_log_path(),
            debug_snapshot_path: None,
            report: ReportConfig::default(),
            llm: LlmConfig::default(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            markdown_path: default_markdown_path(),
            html_path: default_html_path(),
            publish_html_path: None,
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn default_partitions() -> Vec<String> {
    vec!["2025".to_string()]
}

fn default_index_url_template() -> String {
    "https://www.mincit.gov.co/normatividad/decretos/{partition}".to_string()
}

fn default_download_dir() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_state_dir() -> PathBuf {
    PathBuf::from("state")
}

fn default_fallback_source() -> String {
    "Ministerio de Comercio, Industria y Turismo".to_string()
}

fn default_log_path() -> PathBuf {
    PathBuf::from("boletin.log")
}

fn default_markdown_path() -> PathBuf {
    PathBuf::from("report.md")
}

fn default_html_path() -> PathBuf {
    PathBuf::from("report.html")
}
