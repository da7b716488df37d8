//! Industry fallback: an ordered keyword table scanned against the job title.
//!
//! Table order is significant: when a title matches several industries, the
//! earliest entry wins. Specific industries (AI/ML, security, data) therefore sit
//! above the generic Technology entry, and Technology sits above Engineering.

use std::collections::HashSet;

use crate::classification::title_tokens;

/// Returned when no keyword in the table matches the title.
pub const DEFAULT_INDUSTRY: &str = "General Business & Services";

/// Keywords shorter than this are only matched as whole words ("ai", "hr", "ux").
const MIN_SUBSTRING_KEYWORD_LEN: usize = 3;

/// Remote labels must be strictly longer than this...
const MIN_LABEL_LEN: usize = 2;
/// ...and strictly shorter than this, in characters.
const MAX_LABEL_LEN: usize = 100;

/// Canonical (industry label, keywords) table, highest precedence first.
/// Keywords are lowercase.
pub static INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Artificial Intelligence & Machine Learning",
        &[
            "machine learning",
            "artificial intelligence",
            "deep learning",
            "ml engineer",
            "mlops",
            "ai engineer",
            "ai researcher",
            "nlp",
            "natural language",
            "computer vision",
            "llm",
            "prompt engineer",
            "ai",
            "ml",
        ],
    ),
    (
        "Cybersecurity",
        &[
            "cybersecurity",
            "cyber security",
            "information security",
            "security engineer",
            "security analyst",
            "penetration tester",
            "infosec",
            "soc analyst",
            "ethical hacker",
        ],
    ),
    (
        "Data & Analytics",
        &[
            "data scientist",
            "data analyst",
            "data engineer",
            "business intelligence",
            "analytics",
            "statistician",
            "bi developer",
        ],
    ),
    (
        "Technology & Software Development",
        &[
            "software",
            "developer",
            "programmer",
            "devops",
            "full stack",
            "fullstack",
            "frontend",
            "front-end",
            "backend",
            "back-end",
            "web developer",
            "mobile developer",
            "cloud",
            "site reliability",
            "systems administrator",
            "it support",
            "network engineer",
            "qa engineer",
            "sre",
            "qa",
            "it",
        ],
    ),
    (
        "Financial Services & Banking",
        &[
            "financ",
            "accountant",
            "accounting",
            "banking",
            "banker",
            "investment",
            "auditor",
            "actuary",
            "treasury",
            "credit analyst",
            "loan officer",
            "tax",
            "cfo",
        ],
    ),
    (
        "Healthcare & Life Sciences",
        &[
            "nurse",
            "nursing",
            "physician",
            "doctor",
            "medical",
            "clinical",
            "pharmac",
            "health",
            "therapist",
            "dental",
            "surgeon",
            "biotech",
            "laboratory",
            "rn",
        ],
    ),
    (
        "Education & Training",
        &[
            "teacher",
            "professor",
            "tutor",
            "instructor",
            "curriculum",
            "education",
            "lecturer",
            "academic",
            "trainer",
        ],
    ),
    (
        "Marketing & Advertising",
        &[
            "marketing",
            "seo",
            "brand",
            "advertising",
            "content strategist",
            "social media",
            "copywriter",
            "public relations",
            "pr",
        ],
    ),
    (
        "Sales & Business Development",
        &[
            "sales",
            "account executive",
            "business development",
            "account manager",
            "sdr",
            "bdr",
        ],
    ),
    (
        "Legal Services",
        &[
            "lawyer",
            "attorney",
            "legal",
            "paralegal",
            "counsel",
            "compliance",
        ],
    ),
    (
        "Human Resources & Recruitment",
        &[
            "human resources",
            "recruit",
            "talent acquisition",
            "people operations",
            "hr",
        ],
    ),
    (
        "Design & Creative",
        &[
            "designer",
            "graphic",
            "illustrator",
            "animator",
            "art director",
            "creative",
            "ux",
            "ui",
        ],
    ),
    (
        "Engineering & Manufacturing",
        &[
            "mechanical",
            "electrical",
            "civil engineer",
            "chemical engineer",
            "manufacturing",
            "production",
            "industrial",
            "process engineer",
            "quality engineer",
        ],
    ),
    (
        "Supply Chain & Logistics",
        &[
            "logistics",
            "supply chain",
            "warehouse",
            "procurement",
            "inventory",
            "fleet",
            "dispatcher",
        ],
    ),
    (
        "Retail & E-commerce",
        &[
            "retail",
            "e-commerce",
            "ecommerce",
            "merchandis",
            "cashier",
            "store manager",
        ],
    ),
    (
        "Hospitality & Tourism",
        &[
            "hotel",
            "chef",
            "restaurant",
            "hospitality",
            "tourism",
            "travel",
            "barista",
            "concierge",
        ],
    ),
    (
        "Construction & Real Estate",
        &[
            "construction",
            "real estate",
            "property",
            "surveyor",
            "carpenter",
            "electrician",
            "plumber",
            "site manager",
        ],
    ),
    (
        "Media & Entertainment",
        &[
            "journalist",
            "editor",
            "producer",
            "reporter",
            "video",
            "film",
            "broadcast",
            "music",
        ],
    ),
    (
        "Energy & Utilities",
        &[
            "energy",
            "oil and gas",
            "petroleum",
            "solar",
            "renewable",
            "utilities",
            "wind turbine",
        ],
    ),
    (
        "Government & Public Sector",
        &[
            "government",
            "public policy",
            "policy analyst",
            "civil servant",
            "municipal",
        ],
    ),
    (
        "Consulting & Professional Services",
        &["consultant", "consulting", "advisory"],
    ),
    (
        "Nonprofit & Social Services",
        &[
            "nonprofit",
            "non-profit",
            "social worker",
            "fundraising",
            "community outreach",
        ],
    ),
];

/// Deterministic industry classification from the job title.
///
/// 1. Substring scan in table order (keywords of 3+ characters).
/// 2. Whole-word intersection of title tokens with single-word keywords.
/// 3. [`DEFAULT_INDUSTRY`].
pub fn classify_by_keywords(job_title: &str) -> String {
    let title = job_title.to_lowercase();

    let substring_hit = INDUSTRY_KEYWORDS.iter().find(|(_, keywords)| {
        keywords
            .iter()
            .any(|kw| kw.len() >= MIN_SUBSTRING_KEYWORD_LEN && title.contains(kw))
    });
    if let Some((industry, _)) = substring_hit {
        return industry.to_string();
    }

    let tokens: HashSet<String> = title_tokens(job_title).into_iter().collect();
    let token_hit = INDUSTRY_KEYWORDS.iter().find(|(_, keywords)| {
        keywords
            .iter()
            .any(|kw| !kw.contains(' ') && tokens.contains(*kw))
    });
    if let Some((industry, _)) = token_hit {
        return industry.to_string();
    }

    DEFAULT_INDUSTRY.to_string()
}

/// Normalizes a remote industry label and checks its length.
///
/// Surrounding whitespace, quotes and trailing periods are removed first.
/// Returns `None` when the label should be discarded in favour of the fallback.
pub fn accept_remote_label(reply: &str) -> Option<String> {
    let label = reply
        .trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '`'))
        .trim_end_matches('.')
        .trim();

    let len = label.chars().count();
    if len > MIN_LABEL_LEN && len < MAX_LABEL_LEN {
        Some(label.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_engineer_is_technology() {
        assert_eq!(
            classify_by_keywords("Software Engineer"),
            "Technology & Software Development"
        );
    }

    #[test]
    fn test_ai_keywords_take_precedence_over_technology() {
        // Matches both "machine learning" (AI/ML) and "software" (Technology).
        assert_eq!(
            classify_by_keywords("Machine Learning Software Engineer"),
            "Artificial Intelligence & Machine Learning"
        );
    }

    #[test]
    fn test_first_matching_category_in_table_order_wins() {
        let title = "Data Analyst, Healthcare Software";
        let expected = INDUSTRY_KEYWORDS
            .iter()
            .find(|(_, kws)| {
                kws.iter()
                    .any(|kw| kw.len() >= MIN_SUBSTRING_KEYWORD_LEN && title.to_lowercase().contains(kw))
            })
            .map(|(industry, _)| *industry)
            .unwrap();
        assert_eq!(expected, "Data & Analytics");
        assert_eq!(classify_by_keywords(title), expected);
    }

    #[test]
    fn test_technology_beats_engineering_for_software_titles() {
        assert_eq!(
            classify_by_keywords("Embedded Software Production Engineer"),
            "Technology & Software Development"
        );
        assert_eq!(
            classify_by_keywords("Mechanical Design Engineer"),
            "Engineering & Manufacturing"
        );
    }

    #[test]
    fn test_short_acronyms_match_only_as_whole_words() {
        assert_eq!(
            classify_by_keywords("HR Generalist"),
            "Human Resources & Recruitment"
        );
        assert_eq!(
            classify_by_keywords("Chief AI Officer"),
            "Artificial Intelligence & Machine Learning"
        );
        // "ai" inside "Maintenance" and "Chair" must not count.
        assert_eq!(classify_by_keywords("Maintenance Chair"), DEFAULT_INDUSTRY);
    }

    #[test]
    fn test_unknown_title_gets_default() {
        assert_eq!(classify_by_keywords("Office Coordinator"), DEFAULT_INDUSTRY);
        assert_eq!(classify_by_keywords(""), DEFAULT_INDUSTRY);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(
            classify_by_keywords("REGISTERED NURSE"),
            "Healthcare & Life Sciences"
        );
    }

    #[test]
    fn test_table_keywords_are_lowercase() {
        for (industry, keywords) in INDUSTRY_KEYWORDS {
            for kw in *keywords {
                assert_eq!(*kw, kw.to_lowercase(), "{industry}: keyword '{kw}' must be lowercase");
            }
        }
    }

    #[test]
    fn test_accept_remote_label_strips_quotes_and_period() {
        assert_eq!(
            accept_remote_label("  \"Financial Technology (FinTech)\".\n"),
            Some("Financial Technology (FinTech)".to_string())
        );
    }

    #[test]
    fn test_accept_remote_label_length_bounds() {
        assert_eq!(accept_remote_label("IT"), None);
        assert_eq!(accept_remote_label("Law"), Some("Law".to_string()));
        assert_eq!(accept_remote_label(&"x".repeat(99)).map(|l| l.len()), Some(99));
        assert_eq!(accept_remote_label(&"x".repeat(100)), None);
        assert_eq!(accept_remote_label("   "), None);
    }
}
