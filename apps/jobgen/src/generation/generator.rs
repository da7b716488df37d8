//! Document generation: classify, synthesize the prompt, call the LLM once.
//!
//! Returns the raw, unvalidated response body together with the classification
//! it was generated from; `validator::parse_document` turns the body into a
//! `GeneratedDocument`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::classification::AttributeClassifier;
use crate::errors::AppError;
use crate::generation::prompts::GENERATION_SYSTEM;
use crate::generation::synthesizer::build_generation_prompt;
use crate::llm_client::{CompletionRequest, TextCompletionService};
use crate::models::{ClassificationResult, JobRequest};

/// Creative but consistent prose.
const GENERATION_TEMPERATURE: f32 = 0.7;
/// Six sections of prose and lists, plus the echoed params.
const GENERATION_MAX_TOKENS: u32 = 2048;

/// Unvalidated model output and the attributes the prompt was built with.
#[derive(Debug)]
pub struct GenerationOutput {
    pub raw: String,
    pub classification: ClassificationResult,
}

pub struct DocumentGenerator {
    llm: Arc<dyn TextCompletionService>,
    classifier: AttributeClassifier,
}

impl DocumentGenerator {
    pub fn new(llm: Arc<dyn TextCompletionService>) -> Self {
        Self {
            classifier: AttributeClassifier::new(Arc::clone(&llm)),
            llm,
        }
    }

    /// Runs classification and prompt synthesis, then the generation call.
    ///
    /// Fails with `AppError::Generation` if the call errors or the body is empty.
    /// Not retried.
    pub async fn generate(&self, request: &JobRequest) -> Result<GenerationOutput, AppError> {
        let classification = self.classifier.classify(request).await;
        let prompt = build_generation_prompt(request, &classification);
        debug!("Generation prompt built: {} chars", prompt.len());

        info!("Generating job description for '{}'", request.job_title);
        let raw = self
            .llm
            .complete(&CompletionRequest {
                system: GENERATION_SYSTEM,
                prompt: &prompt,
                temperature: GENERATION_TEMPERATURE,
                max_tokens: GENERATION_MAX_TOKENS,
                json_output: true,
            })
            .await
            .map_err(|e| AppError::Generation(format!("Document generation LLM call failed: {e}")))?;

        if raw.trim().is_empty() {
            return Err(AppError::Generation(
                "LLM returned an empty document".to_string(),
            ));
        }

        debug!("Generation response received: {} chars", raw.len());
        Ok(GenerationOutput {
            raw,
            classification,
        })
    }
}
