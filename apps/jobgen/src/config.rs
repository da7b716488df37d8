use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::JobRequest;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub job_config_path: PathBuf,
    pub output_dir: PathBuf,
    pub llm_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            job_config_path: std::env::var("JOB_CONFIG_PATH")
                .unwrap_or_else(|_| "config.json".to_string())
                .into(),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "output".to_string())
                .into(),
            llm_timeout: Duration::from_secs(
                std::env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "120".to_string())
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Raw shape of the job configuration file. Every field is optional here so
/// that a missing one is reported by name rather than as a serde error.
#[derive(Debug, Deserialize)]
struct JobConfigFile {
    job_title: Option<String>,
    experience: Option<f64>,
    education: Option<String>,
    location_type: Option<String>,
    required_skills: Option<Vec<String>>,
}

/// Reads the job configuration file (JSON) into a validated `JobRequest`.
pub fn load_job_request(path: &Path) -> Result<JobRequest, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::Configuration(format!(
            "Failed to read job config {}: {e}",
            path.display()
        ))
    })?;
    parse_job_request(&contents)
}

pub fn parse_job_request(json: &str) -> Result<JobRequest, AppError> {
    let file: JobConfigFile = serde_json::from_str(json)
        .map_err(|e| AppError::Configuration(format!("Invalid job config: {e}")))?;

    JobRequest::new(
        file.job_title.ok_or_else(|| missing("job_title"))?,
        file.experience.ok_or_else(|| missing("experience"))?,
        file.education.ok_or_else(|| missing("education"))?,
        file.location_type,
        file.required_skills,
    )
}

fn missing(field: &str) -> AppError {
    AppError::Configuration(format!("Job config is missing required field '{field}'"))
}
