mod archive;
mod batch;
mod config;
mod errors;
mod extraction;
mod fields;
mod llm_client;
mod models;
mod report;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::archive::ZipArchiveSource;
use crate::batch::BatchOrchestrator;
use crate::config::Config;
use crate::errors::AppError;
use crate::fields::FieldExtractor;
use crate::llm_client::{CompletionService, LlmClient};
use crate::report::{FileReportSink, ReportSink};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume parser v{}", env!("CARGO_PKG_VERSION"));

    run(&config).await?;
    Ok(())
}

async fn run(config: &Config) -> Result<(), AppError> {
    // Validate the output path before spending any service calls.
    let sink = FileReportSink::new(&config.output_path)?;
    info!("Report will be written to: {}", sink.path().display());

    let service: Option<Arc<dyn CompletionService>> = match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config)?;
            info!("LLM client initialized (model: {})", client.model());
            Some(Arc::new(client) as Arc<dyn CompletionService>)
        }
        None => {
            warn!("OPENAI_API_KEY is not set; records will carry filename and preview only.");
            None
        }
    };

    let extractor = FieldExtractor::new(service).with_prompt_char_limit(config.prompt_char_limit);
    let orchestrator = BatchOrchestrator::new(extractor);

    info!("Processing resumes from: {}", config.archive_path.display());
    let mut archive = ZipArchiveSource::open(&config.archive_path)?;
    let report = orchestrator.run(&mut archive).await;

    if report.is_empty() {
        info!("No data was parsed.");
        return Ok(());
    }

    let summary = report.summary();
    info!(
        "Successfully parsed {} resumes (parsed={}, unsupported={}, extraction_failed={}, processing_errors={}, skipped={}).",
        report.len(),
        summary.parsed,
        summary.unsupported,
        summary.extraction_failed,
        summary.processing_errors,
        summary.skipped
    );

    sink.write(report.records())?;
    Ok(())
}
