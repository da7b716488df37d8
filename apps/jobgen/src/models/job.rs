use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The job attributes a single pipeline run is driven by.
///
/// Build it with [`JobRequest::new`], which enforces the required-field rules.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRequest {
    pub job_title: String,
    pub experience_years: f64,
    pub education: String,
    /// `None` means the model picks the location type.
    pub location_type: Option<String>,
    /// `None` means the model infers the required skills.
    pub required_skills: Option<Vec<String>>,
}

impl JobRequest {
    /// Validates and normalizes raw job inputs.
    ///
    /// Blank `location_type` and empty `required_skills` are treated as absent.
    pub fn new(
        job_title: impl Into<String>,
        experience_years: f64,
        education: impl Into<String>,
        location_type: Option<String>,
        required_skills: Option<Vec<String>>,
    ) -> Result<Self, AppError> {
        let job_title = job_title.into().trim().to_string();
        if job_title.is_empty() {
            return Err(AppError::Configuration(
                "job_title must not be empty".to_string(),
            ));
        }

        if !experience_years.is_finite() || experience_years < 0.0 {
            return Err(AppError::Configuration(format!(
                "experience must be a non-negative number of years, got {experience_years}"
            )));
        }

        let education = education.into().trim().to_string();
        if education.is_empty() {
            return Err(AppError::Configuration(
                "education must not be empty".to_string(),
            ));
        }

        let location_type = location_type
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        let required_skills = required_skills
            .map(|skills| {
                skills
                    .into_iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|skills| !skills.is_empty());

        Ok(Self {
            job_title,
            experience_years,
            education,
            location_type,
            required_skills,
        })
    }
}

/// Controlled seniority vocabulary, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExperienceLevel {
    EntryLevel,
    Junior,
    MidLevel,
    Senior,
    Lead,
    Principal,
    Manager,
    Director,
    Executive,
    CLevel,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 10] = [
        ExperienceLevel::EntryLevel,
        ExperienceLevel::Junior,
        ExperienceLevel::MidLevel,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
        ExperienceLevel::Principal,
        ExperienceLevel::Manager,
        ExperienceLevel::Director,
        ExperienceLevel::Executive,
        ExperienceLevel::CLevel,
    ];

    /// Human-readable label, as used in prompts and generated documents.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "Entry Level",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid Level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Lead => "Lead",
            ExperienceLevel::Principal => "Principal",
            ExperienceLevel::Manager => "Manager",
            ExperienceLevel::Director => "Director",
            ExperienceLevel::Executive => "Executive",
            ExperienceLevel::CLevel => "C-Level",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercase with spaces, hyphens and underscores removed: "Mid-Level" -> "midlevel".
fn squash(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for ExperienceLevel {
    type Err = String;

    /// Exact match against the vocabulary, ignoring case and separators.
    /// "Senior" parses; "Senior, given the title" does not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s.trim());
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| squash(level.label()) == wanted)
            .ok_or_else(|| format!("'{s}' is not a recognised experience level"))
    }
}

impl TryFrom<String> for ExperienceLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        level.label().to_string()
    }
}

/// Derived attributes for one request. Computed once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub industry: String,
    pub experience_level: ExperienceLevel,
}
