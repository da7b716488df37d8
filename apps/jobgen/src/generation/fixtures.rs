//! Model responses shared by validator, generator and pipeline tests.

/// A complete, well-formed response for "Software Engineer", 2 years, BS Computer Science.
/// `skills` repeats "Python" on purpose.
pub const WELL_FORMED_RESPONSE: &str = r#"{
  "timestamp": "2026-03-14T09:26:53Z",
  "params": {
    "job_title": "Software Engineer",
    "industry": "Technology & Software Development",
    "Education": "BS Computer Science",
    "experience_level": "Junior",
    "company_name": "Your Company",
    "location_type": "Hybrid",
    "experience": 2,
    "required_skills": ["Python", "Git", "SQL"],
    "preferred_skills": ["Docker", "AWS", "CI/CD"]
  },
  "outputs": {
    "sections": {
      "Executive Summary": "Your Company is looking for a Software Engineer with 2 years of experience to build reliable backend services.",
      "Key Responsibilities": [
        "Design, build and maintain Python services",
        "Write and review SQL queries and migrations",
        "Collaborate with product and QA through Git-based workflows"
      ],
      "Required Qualifications": [
        "BS Computer Science or equivalent",
        "2+ years of professional software development",
        "Working knowledge of Python and SQL"
      ],
      "Preferred Qualifications": [
        "Experience with Docker and AWS",
        "Exposure to CI/CD pipelines"
      ],
      "What We Offer": [
        "Competitive salary",
        "Hybrid working",
        "Learning budget"
      ],
      "skills": ["Python", "SQL", "Git", "Python", "Docker", "AWS", "CI/CD", "communication"]
    }
  }
}"#;
