//! One end-to-end run: classify → synthesize → generate → validate → persist.
//!
//! Nothing is written unless generation and validation both succeed. The saved
//! document always echoes the submitted request and the derived classification.

use std::path::{Path, PathBuf};

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::config::load_job_request;
use crate::errors::AppError;
use crate::generation::{parse_document, pin_request_echo, DocumentGenerator};
use crate::models::JobRequest;
use crate::storage::DocumentStore;

/// Loads the job config, then runs the pipeline. A bad config fails before any LLM call.
pub async fn run_from_file(
    job_config_path: &Path,
    generator: &DocumentGenerator,
    store: &DocumentStore,
) -> Result<PathBuf, AppError> {
    let request = load_job_request(job_config_path)?;
    run(&request, generator, store).await
}

pub async fn run(
    request: &JobRequest,
    generator: &DocumentGenerator,
    store: &DocumentStore,
) -> Result<PathBuf, AppError> {
    let span = info_span!("pipeline", run_id = %Uuid::new_v4(), job_title = %request.job_title);

    async move {
        let output = generator.generate(request).await?;
        let mut document = parse_document(&output.raw)?;
        pin_request_echo(&mut document, request, &output.classification);
        info!(
            industry = %document.params.industry,
            experience_level = %document.params.experience_level,
            skills = document.outputs.sections.skills.len(),
            "Job description validated"
        );
        store.save(&document)
    }
    .instrument(span)
    .await
}
