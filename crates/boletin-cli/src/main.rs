//! Boletin CLI - watch a publication index, enrich new documents, publish
//! reports, and send the digest.

use anyhow::Context;
use boletin_cli::{logging, Cli, Command, FileConfig};
use boletin_enricher::{Enricher, EnricherConfig, PdfTextExtractor};
use boletin_llm::OpenAiProvider;
use boletin_notify::SmtpMailer;
use boletin_pipeline::{write_reports, Pipeline, PipelineConfig};
use boletin_source::{Acquirer, AttachmentLinkExtractor, Discovery, HttpFetcher};
use boletin_store::CorpusStore;
use clap::Parser;
use tracing::{error, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Unhandled faults are logged with context before the process
        // reports failure to the scheduler. State persisted before the
        // failure is retained.
        error!("run aborted: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = FileConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    config.apply_env();

    logging::init(&config.log_path)?;

    let pipeline_config = config.pipeline_config();
    pipeline_config.validate().map_err(anyhow::Error::msg)?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run_pipeline(&config, pipeline_config).await,
        Command::Report => regenerate_reports(&pipeline_config),
    }
}

async fn run_pipeline(config: &FileConfig, pipeline_config: PipelineConfig) -> anyhow::Result<()> {
    let mut discovery = Discovery::new(
        HttpFetcher::new()?,
        AttachmentLinkExtractor::new(),
        pipeline_config.index_url_template.clone(),
    );
    if let Some(path) = &pipeline_config.debug_snapshot_path {
        discovery = discovery.with_snapshot_path(path);
    }

    let acquirer = Acquirer::new(HttpFetcher::new()?, pipeline_config.download_dir.clone());

    let provider: Option<OpenAiProvider> = config.llm_provider()?;
    if provider.is_none() {
        warn!("no understanding-service credential configured; summaries will be skipped");
    }
    let enricher = Enricher::new(provider, PdfTextExtractor::new(), EnricherConfig::default());

    let store = CorpusStore::new(pipeline_config.state_dir.clone());
    let mailer = config.mailer_config().complete().map(SmtpMailer::new);

    let mut pipeline = Pipeline::new(discovery, acquirer, enricher, store, mailer, pipeline_config);
    let summary = pipeline.run().await?;

    if summary.is_noop() {
        println!("No new documents this run.");
    }
    println!(
        "Run finished: {} discovered, {} new, {} processed, {} skipped{}",
        summary.discovered,
        summary.new_items,
        summary.processed.len(),
        summary.skipped.len(),
        if summary.digest_sent { ", digest sent" } else { "" }
    );
    Ok(())
}

fn regenerate_reports(config: &PipelineConfig) -> anyhow::Result<()> {
    let store = CorpusStore::new(config.state_dir.clone());
    let state = store.load();

    if state.is_empty() {
        println!("Corpus is empty; nothing to report.");
        return Ok(());
    }

    write_reports(config, &state)?;
    println!(
        "Reports regenerated for {} record(s).",
        state.enriched_records.len()
    );
    Ok(())
}
