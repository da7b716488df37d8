use serde::{Deserialize, Serialize};

use crate::models::job::ExperienceLevel;

pub const DEFAULT_COMPANY_NAME: &str = "Your Company";
pub const DEFAULT_LOCATION_TYPE: &str = "Hybrid";

/// A validated job description. Built by `generation::validator::parse_document`.
///
/// Serializes back to the same keys the generation prompt asks for, so a parsed
/// document can be written out and parsed again unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub timestamp: String,
    pub params: DocumentParams,
    pub outputs: DocumentOutputs,
}

/// The request as echoed back by the model, plus the derived classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentParams {
    pub job_title: String,
    pub industry: String,
    #[serde(rename = "Education", alias = "education")]
    pub education: String,
    pub experience_level: ExperienceLevel,
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_location_type")]
    pub location_type: String,
    pub experience: f64,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutputs {
    pub sections: DocumentSections,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSections {
    #[serde(rename = "Executive Summary", alias = "executive_summary")]
    pub executive_summary: String,
    #[serde(rename = "Key Responsibilities", alias = "responsibilities")]
    pub responsibilities: Vec<String>,
    #[serde(rename = "Required Qualifications", alias = "required_qualifications")]
    pub required_qualifications: Vec<String>,
    #[serde(rename = "Preferred Qualifications", alias = "preferred_qualifications")]
    pub preferred_qualifications: Vec<String>,
    #[serde(rename = "What We Offer", alias = "benefits")]
    pub benefits: Vec<String>,
    /// Unique entries, in order of first appearance.
    pub skills: Vec<String>,
}

fn default_company_name() -> String {
    DEFAULT_COMPANY_NAME.to_string()
}

fn default_location_type() -> String {
    DEFAULT_LOCATION_TYPE.to_string()
}
