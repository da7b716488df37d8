//! Prompt synthesis: raw job inputs plus derived classification become one
//! generation instruction with an explicit target schema.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::generation::prompts::{
    DOCUMENT_SCHEMA_TEMPLATE, GENERATION_PROMPT_TEMPLATE, INFER_LOCATION_INSTRUCTION,
    INFER_LOCATION_PLACEHOLDER, INFER_SKILLS_INSTRUCTION, INFER_SKILLS_PLACEHOLDER,
};
use crate::models::document::DEFAULT_COMPANY_NAME;
use crate::models::{ClassificationResult, JobRequest};

/// Builds the generation prompt, stamped with the current time.
pub fn build_generation_prompt(request: &JobRequest, classification: &ClassificationResult) -> String {
    build_generation_prompt_at(request, classification, Utc::now())
}

/// Same as [`build_generation_prompt`] with an explicit timestamp.
pub fn build_generation_prompt_at(
    request: &JobRequest,
    classification: &ClassificationResult,
    generated_at: DateTime<Utc>,
) -> String {
    let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);

    let (location_text, location_value) = match &request.location_type {
        Some(location) => (location.clone(), location.clone()),
        None => (
            INFER_LOCATION_INSTRUCTION.to_string(),
            INFER_LOCATION_PLACEHOLDER.to_string(),
        ),
    };

    let (skills_text, skills_value) = match &request.required_skills {
        Some(skills) => (to_json(skills), to_json(skills)),
        None => (
            INFER_SKILLS_INSTRUCTION.to_string(),
            to_json(&[INFER_SKILLS_PLACEHOLDER]),
        ),
    };

    let schema = fill_template(
        DOCUMENT_SCHEMA_TEMPLATE,
        &[
            ("timestamp", to_json(&timestamp)),
            ("job_title", to_json(&request.job_title)),
            ("industry", to_json(&classification.industry)),
            ("education", to_json(&request.education)),
            ("experience_level", to_json(&classification.experience_level)),
            ("company_name", to_json(&DEFAULT_COMPANY_NAME)),
            ("location_type", to_json(&location_value)),
            ("experience", to_json(&request.experience_years)),
            ("required_skills", skills_value),
        ],
    );

    fill_template(
        GENERATION_PROMPT_TEMPLATE,
        &[
            ("job_title", request.job_title.clone()),
            ("experience", request.experience_years.to_string()),
            ("education", request.education.clone()),
            ("location", location_text),
            ("required_skills", skills_text),
            ("industry", classification.industry.clone()),
            ("experience_level", classification.experience_level.to_string()),
            ("schema", schema),
        ],
    )
}

/// Compact JSON for a value that is known to serialize (strings, numbers, lists).
fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Replaces `{name}` placeholders in one left-to-right pass.
/// Braces that do not enclose a known name are copied through untouched.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::ExperienceLevel;

    fn request(location: Option<&str>, skills: Option<Vec<&str>>) -> JobRequest {
        JobRequest::new(
            "Software Engineer",
            2.0,
            "BS Computer Science",
            location.map(str::to_string),
            skills.map(|s| s.into_iter().map(str::to_string).collect()),
        )
        .unwrap()
    }

    fn classification() -> ClassificationResult {
        ClassificationResult {
            industry: "Technology & Software Development".to_string(),
            experience_level: ExperienceLevel::Junior,
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    /// The schema block sits between "Required JSON structure:" and "Instructions:".
    fn extract_schema(prompt: &str) -> serde_json::Value {
        let start = prompt.find("Required JSON structure:\n").unwrap() + "Required JSON structure:\n".len();
        let end = prompt.find("\n\nInstructions:").unwrap();
        serde_json::from_str(&prompt[start..end]).unwrap()
    }

    #[test]
    fn test_prompt_embeds_inputs_and_classification() {
        let prompt = build_generation_prompt_at(&request(None, None), &classification(), fixed_time());
        assert!(prompt.contains("- Job Title: Software Engineer"));
        assert!(prompt.contains("- Experience: 2 years"));
        assert!(prompt.contains("- Education: BS Computer Science"));
        assert!(prompt.contains("- Industry: Technology & Software Development"));
        assert!(prompt.contains("- Experience Level: Junior"));
        assert!(prompt.contains("2026-03-14T09:26:53Z"));
    }

    #[test]
    fn test_missing_location_and_skills_ask_model_to_infer() {
        let prompt = build_generation_prompt_at(&request(None, None), &classification(), fixed_time());
        assert!(prompt.contains(&format!("- Location Type: {INFER_LOCATION_INSTRUCTION}")));
        assert!(prompt.contains(&format!("- Required Skills: {INFER_SKILLS_INSTRUCTION}")));
    }

    #[test]
    fn test_supplied_location_and_skills_are_literal() {
        let prompt = build_generation_prompt_at(
            &request(Some("Remote"), Some(vec!["Rust", "SQL"])),
            &classification(),
            fixed_time(),
        );
        assert!(prompt.contains("- Location Type: Remote"));
        assert!(prompt.contains(r#"- Required Skills: ["Rust","SQL"]"#));
        assert!(!prompt.contains(INFER_LOCATION_INSTRUCTION));

        let schema = extract_schema(&prompt);
        assert_eq!(schema["params"]["location_type"], "Remote");
        assert_eq!(schema["params"]["required_skills"], serde_json::json!(["Rust", "SQL"]));
    }

    #[test]
    fn test_schema_is_valid_json_with_expected_keys() {
        let prompt = build_generation_prompt_at(&request(None, None), &classification(), fixed_time());
        let schema = extract_schema(&prompt);

        let top: Vec<_> = schema.as_object().unwrap().keys().cloned().collect();
        assert_eq!(top.len(), 3);
        for key in ["timestamp", "params", "outputs"] {
            assert!(top.iter().any(|k| k == key), "missing top-level key {key}");
        }

        let params = &schema["params"];
        assert_eq!(params["job_title"], "Software Engineer");
        assert_eq!(params["industry"], "Technology & Software Development");
        assert_eq!(params["Education"], "BS Computer Science");
        assert_eq!(params["experience_level"], "Junior");
        assert_eq!(params["company_name"], "Your Company");
        assert_eq!(params["experience"], 2.0);
        assert!(params["preferred_skills"].is_array());

        let sections = schema["outputs"]["sections"].as_object().unwrap();
        for key in [
            "Executive Summary",
            "Key Responsibilities",
            "Required Qualifications",
            "Preferred Qualifications",
            "What We Offer",
            "skills",
        ] {
            assert!(sections.contains_key(key), "missing section {key}");
        }
    }

    #[test]
    fn test_values_with_quotes_and_braces_stay_valid_json() {
        let request = JobRequest::new(
            "\"Rockstar\" {Backend} Developer",
            5.5,
            "Self-taught",
            None,
            None,
        )
        .unwrap();
        let prompt = build_generation_prompt_at(&request, &classification(), fixed_time());
        let schema = extract_schema(&prompt);
        assert_eq!(schema["params"]["job_title"], "\"Rockstar\" {Backend} Developer");
        assert_eq!(schema["params"]["experience"], 5.5);
        assert!(prompt.contains("- Experience: 5.5 years"));
    }

    #[test]
    fn test_prompt_demands_json_only_and_skill_dedup() {
        let prompt = build_generation_prompt_at(&request(None, None), &classification(), fixed_time());
        assert!(prompt.contains("Return ONLY valid JSON"));
        assert!(prompt.contains("no duplicates"));
        assert!(prompt.contains("no placeholders"));
    }

    #[test]
    fn test_prompt_is_deterministic_for_fixed_time() {
        let a = build_generation_prompt_at(&request(None, None), &classification(), fixed_time());
        let b = build_generation_prompt_at(&request(None, None), &classification(), fixed_time());
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template(
            "{a} and {b} and {unknown} and {",
            &[("a", "{b}".to_string()), ("b", "B".to_string())],
        );
        assert_eq!(filled, "{b} and B and {unknown} and {");
    }
}
