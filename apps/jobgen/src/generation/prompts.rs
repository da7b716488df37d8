// All LLM prompt constants for the Generation module.
// Placeholders are `{name}`; they are filled in a single pass by the synthesizer,
// so substituted values are never re-scanned.

/// Fixed system instruction for document generation.
pub const GENERATION_SYSTEM: &str =
    "You are an expert job description generator. Return only valid JSON.";

/// Shown to the model when no location type was configured.
pub const INFER_LOCATION_INSTRUCTION: &str =
    "INFER and choose the best location type (Remote, Hybrid, On-site)";
pub const INFER_LOCATION_PLACEHOLDER: &str = "INFER: one of Remote, Hybrid, On-site";

/// Shown to the model when no required skills were configured.
pub const INFER_SKILLS_INSTRUCTION: &str = "INFER and generate a relevant required skills list";
pub const INFER_SKILLS_PLACEHOLDER: &str = "INFER 5-8 required skills for this role";

/// Target JSON structure. Every placeholder is replaced by a JSON-encoded value,
/// so the filled schema is itself valid JSON.
/// Replace: {timestamp}, {job_title}, {industry}, {education}, {experience_level},
///          {company_name}, {location_type}, {experience}, {required_skills}
pub const DOCUMENT_SCHEMA_TEMPLATE: &str = r#"{
  "timestamp": {timestamp},
  "params": {
    "job_title": {job_title},
    "industry": {industry},
    "Education": {education},
    "experience_level": {experience_level},
    "company_name": {company_name},
    "location_type": {location_type},
    "experience": {experience},
    "required_skills": {required_skills},
    "preferred_skills": [
      "Generate 3-4 complementary skills for this role"
    ]
  },
  "outputs": {
    "sections": {
      "Executive Summary": "A compelling overview of the opportunity at the company: workplace culture, strategic impact, and the experience the role needs.",
      "Key Responsibilities": [
        "5-7 responsibilities crafted for the stated years of experience. Use strong action verbs covering accountability, leadership, collaboration, technical/functional and growth-focused duties."
      ],
      "Required Qualifications": [
        "4-6 non-negotiable requirements: minimum education, years of experience, certifications, essential hard and soft skills."
      ],
      "Preferred Qualifications": [
        "3-4 additional attributes that would strengthen a candidate (advanced technologies, specializations, leadership, languages, etc)."
      ],
      "What We Offer": [
        "4-5 benefits: growth, career development, work-life balance, competitive compensation, health/wellness, workplace flexibility."
      ],
      "skills": [
        "Every unique tool, programming language, technology and soft skill mentioned anywhere in the sections above."
      ]
    }
  }
}"#;

/// Document generation prompt.
/// Replace: {job_title}, {experience}, {education}, {location}, {required_skills},
///          {industry}, {experience_level}, {schema}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"You are an expert AI assistant specialized in creating detailed, professional job descriptions.

Generate a complete JSON job description matching the exact structure below. Return only the JSON object.

Input:
- Job Title: {job_title}
- Experience: {experience} years
- Education: {education}
- Location Type: {location}
- Required Skills: {required_skills}

Derived attributes (use them as given):
- Industry: {industry}
- Experience Level: {experience_level}

Required JSON structure:
{schema}

Instructions:
- job_title, education and experience are always required and must be explicitly referenced throughout the output.
- If location_type or required_skills say INFER, choose or generate them appropriately for the role, education and experience.
- Keep "timestamp", "industry" and "experience_level" exactly as given.
- Make all sections rich, detailed, authentic and professional. Replace every instruction text with real content: no placeholders.
- "skills" must list each skill, tool or technology mentioned anywhere in the sections exactly once: no duplicates.
- Return ONLY valid JSON matching this exact structure, fully populated with production-ready content."#;
