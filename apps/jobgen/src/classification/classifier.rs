//! AttributeClassifier: derives industry and experience level for a job.
//!
//! Two tiers for each attribute: a low-temperature LLM call with a strict
//! single-label prompt, then the deterministic keyword/years rules when the call
//! fails or the label is unusable. Neither method returns an error.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::classification::prompts::{EXPERIENCE_LEVEL_PROMPT_TEMPLATE, INDUSTRY_PROMPT_TEMPLATE};
use crate::classification::{experience, industry};
use crate::llm_client::prompts::SINGLE_LABEL_SYSTEM;
use crate::llm_client::{CompletionRequest, LlmError, TextCompletionService};
use crate::models::{ClassificationResult, ExperienceLevel, JobRequest};

/// Near-deterministic sampling for classification calls.
const CLASSIFICATION_TEMPERATURE: f32 = 0.1;
const INDUSTRY_MAX_TOKENS: u32 = 50;
const EXPERIENCE_LEVEL_MAX_TOKENS: u32 = 20;

pub struct AttributeClassifier {
    llm: Arc<dyn TextCompletionService>,
}

impl AttributeClassifier {
    pub fn new(llm: Arc<dyn TextCompletionService>) -> Self {
        Self { llm }
    }

    /// Classifies both attributes, industry first. Calls run sequentially.
    pub async fn classify(&self, request: &JobRequest) -> ClassificationResult {
        let industry = self.classify_industry(&request.job_title).await;
        let experience_level = self
            .classify_experience_level(request.experience_years, &request.job_title)
            .await;

        info!(
            "Classified '{}': industry='{}', experience_level={}",
            request.job_title, industry, experience_level
        );

        ClassificationResult {
            industry,
            experience_level,
        }
    }

    pub async fn classify_industry(&self, job_title: &str) -> String {
        let prompt = INDUSTRY_PROMPT_TEMPLATE.replace("{job_title}", job_title);

        match self.ask(&prompt, INDUSTRY_MAX_TOKENS).await {
            Ok(reply) => match industry::accept_remote_label(&reply) {
                Some(label) => {
                    debug!("LLM industry label accepted: {label}");
                    return label;
                }
                None => warn!(
                    "LLM industry label {:?} rejected (length out of bounds), using keyword fallback",
                    reply
                ),
            },
            Err(e) => warn!("Industry classification via LLM failed, using keyword fallback: {e}"),
        }

        industry::classify_by_keywords(job_title)
    }

    pub async fn classify_experience_level(&self, years: f64, job_title: &str) -> ExperienceLevel {
        let levels = ExperienceLevel::ALL
            .iter()
            .map(|level| format!("- {level}"))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = EXPERIENCE_LEVEL_PROMPT_TEMPLATE
            .replace("{job_title}", job_title)
            .replace("{years}", &years.to_string())
            .replace("{levels}", &levels);

        match self.ask(&prompt, EXPERIENCE_LEVEL_MAX_TOKENS).await {
            Ok(reply) => match parse_level_reply(&reply) {
                Some(level) => {
                    debug!("LLM experience level accepted: {level}");
                    return level;
                }
                None => warn!(
                    "LLM experience level {:?} is not in the vocabulary, using rule fallback",
                    reply
                ),
            },
            Err(e) => {
                warn!("Experience level classification via LLM failed, using rule fallback: {e}")
            }
        }

        experience::classify_by_rules(years, job_title)
    }

    async fn ask(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        self.llm
            .complete(&CompletionRequest {
                system: SINGLE_LABEL_SYSTEM,
                prompt,
                temperature: CLASSIFICATION_TEMPERATURE,
                max_tokens,
                json_output: false,
            })
            .await
    }
}

/// Accepts a reply only if, once quotes and a trailing period are removed, it is
/// exactly one vocabulary label. A sentence that merely mentions a level is rejected.
fn parse_level_reply(reply: &str) -> Option<ExperienceLevel> {
    reply
        .trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '`'))
        .trim_end_matches('.')
        .parse()
        .ok()
}
