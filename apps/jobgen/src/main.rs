mod classification;
mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod pipeline;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::DocumentGenerator;
use crate::llm_client::{LlmClient, TextCompletionService};
use crate::storage::DocumentStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobgen v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client, shared read-only by classifier and generator
    let llm: Arc<dyn TextCompletionService> =
        Arc::new(LlmClient::new(config.anthropic_api_key.clone(), config.llm_timeout)?);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let generator = DocumentGenerator::new(llm);
    let store = DocumentStore::new(&config.output_dir);

    info!("Reading job config from {}", config.job_config_path.display());
    match pipeline::run_from_file(&config.job_config_path, &generator, &store).await {
        Ok(path) => {
            info!("Done: {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!(code = e.code(), "Job description generation failed: {e}");
            Err(e.into())
        }
    }
}
