// LLM prompt constants for the Classification module.

/// Industry classification prompt. Replace `{job_title}` before sending.
pub const INDUSTRY_PROMPT_TEMPLATE: &str = r#"Classify the industry of the following job title.

Job title: {job_title}

Rules:
- Use an industry-standard taxonomy (NAICS, GICS or LinkedIn industry names as reference).
- Be precise: prefer "Financial Technology (FinTech)" over "Technology", and
  "Healthcare & Life Sciences" over "Services".
- When the title names a specialised field (e.g. machine learning, cybersecurity),
  pick that field rather than the generic parent industry.
- Respond with the industry name only: no explanation, no quotes, no trailing period.
- The answer must be shorter than 100 characters.

Examples:
- "Quantitative Developer" -> Financial Technology (FinTech)
- "ICU Nurse" -> Healthcare & Life Sciences
- "Computer Vision Engineer" -> Artificial Intelligence & Machine Learning

Industry:"#;

/// Experience-level classification prompt.
/// Replace: {job_title}, {years}, {levels}
pub const EXPERIENCE_LEVEL_PROMPT_TEMPLATE: &str = r#"Determine the experience level for this role.

Job title: {job_title}
Years of experience: {years}

Allowed levels (choose exactly one, spelled exactly as listed):
{levels}

Rules:
- An explicit seniority word in the title overrides the years. A "Senior Data Analyst"
  with 2 years is Senior, not Junior; a "Marketing Intern" with 5 years is Entry Level.
- Without a seniority word, use the years: under 1 Entry Level, under 3 Junior,
  under 7 Mid Level, under 12 Senior, under 18 Manager, under 25 Director, otherwise Executive.
- Chief officer titles (CEO, CTO, CFO, ...) are always C-Level.
- Respond with the level only: no explanation, no punctuation.

Level:"#;
