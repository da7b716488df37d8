//! Response validation: raw model text in, well-formed `GeneratedDocument` out.
//!
//! This layer only checks and tidies. It never fills in missing content:
//! anything absent or empty is a `SchemaError`.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDateTime};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::models::{ClassificationResult, GeneratedDocument, JobRequest};

/// Parses and validates a raw model response.
///
/// Checks, in order:
/// 1. the text (minus any code fences) is JSON matching the document schema
/// 2. `timestamp` is an ISO-8601 date-time
/// 3. `job_title`, `industry` and `Education` are non-blank, `experience` is non-negative
/// 4. the executive summary is non-blank and every section list has a non-blank entry
///
/// Blank list entries are dropped and `skills` is de-duplicated (exact match,
/// first occurrence kept).
pub fn parse_document(raw_text: &str) -> Result<GeneratedDocument, AppError> {
    let text = strip_json_fences(raw_text);
    if text.is_empty() {
        return Err(AppError::Schema("Response body is empty".to_string()));
    }

    let mut document: GeneratedDocument = serde_json::from_str(text).map_err(|e| {
        AppError::Schema(format!(
            "Response does not match the job description schema: {e}"
        ))
    })?;

    if !is_iso8601(&document.timestamp) {
        return Err(AppError::Schema(format!(
            "timestamp '{}' is not an ISO-8601 date-time",
            document.timestamp
        )));
    }

    let params = &mut document.params;
    require_text("params.job_title", &mut params.job_title)?;
    require_text("params.industry", &mut params.industry)?;
    require_text("params.Education", &mut params.education)?;
    if !params.experience.is_finite() || params.experience < 0.0 {
        return Err(AppError::Schema(format!(
            "params.experience must be a non-negative number, got {}",
            params.experience
        )));
    }
    params.required_skills = drop_blank(std::mem::take(&mut params.required_skills));
    params.preferred_skills = drop_blank(std::mem::take(&mut params.preferred_skills));

    let sections = &mut document.outputs.sections;
    require_text("Executive Summary", &mut sections.executive_summary)?;
    require_list("Key Responsibilities", &mut sections.responsibilities)?;
    require_list("Required Qualifications", &mut sections.required_qualifications)?;
    require_list("Preferred Qualifications", &mut sections.preferred_qualifications)?;
    require_list("What We Offer", &mut sections.benefits)?;
    require_list("skills", &mut sections.skills)?;

    let before = sections.skills.len();
    sections.skills = dedup_skills(std::mem::take(&mut sections.skills));
    if sections.skills.len() < before {
        warn!(
            "Model returned {} duplicate skill(s); removed",
            before - sections.skills.len()
        );
    }

    debug!(
        "Validated document for '{}' with {} skills",
        document.params.job_title,
        document.outputs.sections.skills.len()
    );

    Ok(document)
}

/// Overwrites the echoed request fields with the values the run actually used.
///
/// `job_title`, `experience` and `Education` come from the request, `industry` and
/// `experience_level` from the classification. `location_type` and `required_skills`
/// are pinned only when the request supplied them; otherwise the model's inferred
/// values stay. Returns the names of the fields that had to be corrected.
pub fn pin_request_echo(
    document: &mut GeneratedDocument,
    request: &JobRequest,
    classification: &ClassificationResult,
) -> Vec<&'static str> {
    let params = &mut document.params;
    let mut corrected = Vec::new();

    pin("job_title", &mut params.job_title, &request.job_title, &mut corrected);
    pin("experience", &mut params.experience, &request.experience_years, &mut corrected);
    pin("Education", &mut params.education, &request.education, &mut corrected);
    pin("industry", &mut params.industry, &classification.industry, &mut corrected);
    pin(
        "experience_level",
        &mut params.experience_level,
        &classification.experience_level,
        &mut corrected,
    );
    if let Some(location) = &request.location_type {
        pin("location_type", &mut params.location_type, location, &mut corrected);
    }
    if let Some(skills) = &request.required_skills {
        pin("required_skills", &mut params.required_skills, skills, &mut corrected);
    }

    if !corrected.is_empty() {
        warn!(
            fields = ?corrected,
            "Model changed request fields in its echo; restored the submitted values"
        );
    }
    corrected
}

fn pin<T: PartialEq + Clone>(
    field: &'static str,
    echoed: &mut T,
    submitted: &T,
    corrected: &mut Vec<&'static str>,
) {
    if echoed != submitted {
        *echoed = submitted.clone();
        corrected.push(field);
    }
}

/// RFC 3339 with offset, or a naive `YYYY-MM-DDTHH:MM:SS[.fff]` local timestamp.
fn is_iso8601(timestamp: &str) -> bool {
    DateTime::parse_from_rfc3339(timestamp).is_ok() || timestamp.parse::<NaiveDateTime>().is_ok()
}

fn require_text(field: &str, value: &mut String) -> Result<(), AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Schema(format!("{field} must not be empty")));
    }
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
    Ok(())
}

fn require_list(field: &str, items: &mut Vec<String>) -> Result<(), AppError> {
    *items = drop_blank(std::mem::take(items));
    if items.is_empty() {
        return Err(AppError::Schema(format!("{field} must contain at least one entry")));
    }
    Ok(())
}

fn drop_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Case-sensitive de-duplication preserving first-occurrence order.
fn dedup_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .filter(|skill| seen.insert(skill.clone()))
        .collect()
}
