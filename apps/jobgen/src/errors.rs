use thiserror::Error;

/// Application-level error type.
///
/// Classification failures never appear here: the classifier recovers from them
/// locally. Everything below aborts the run and no document is written.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required job input is missing or malformed. Raised before any LLM call.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The document generation call failed, timed out, or came back empty.
    #[error("Generation error: {0}")]
    Generation(String),

    /// The model response did not match the job description schema.
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Short machine-readable code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::Schema(_) => "SCHEMA_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }
}
