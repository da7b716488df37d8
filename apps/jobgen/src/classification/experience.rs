//! Experience-level fallback: explicit seniority markers in the title first,
//! then a monotonic ladder over years of experience.

use crate::classification::title_tokens;
use crate::models::ExperienceLevel;

/// Title markers per level, checked top to bottom. The first hit decides.
///
/// Highest seniority comes first so "Senior Manager" resolves to Manager and
/// "Chief ..." titles never fall through to a lower level. Multi-word markers
/// match as a contiguous phrase, single words match as whole tokens.
static TITLE_MARKERS: &[(ExperienceLevel, &[&str])] = &[
    (
        ExperienceLevel::CLevel,
        &[
            "chief", "ceo", "cto", "cfo", "coo", "cio", "cmo", "ciso", "cpo", "cro", "cdo",
        ],
    ),
    (
        ExperienceLevel::Executive,
        &["vp", "svp", "evp", "avp", "vice president"],
    ),
    (ExperienceLevel::Director, &["director", "head of"]),
    (ExperienceLevel::Manager, &["manager"]),
    (ExperienceLevel::Principal, &["principal"]),
    (ExperienceLevel::Lead, &["lead", "leader"]),
    (ExperienceLevel::Senior, &["senior", "sr"]),
    (ExperienceLevel::Junior, &["junior", "jr"]),
    (
        ExperienceLevel::EntryLevel,
        &["intern", "internship", "trainee", "apprentice", "entry level"],
    ),
];

/// Upper bounds (exclusive) of the years ladder.
static YEARS_LADDER: &[(f64, ExperienceLevel)] = &[
    (1.0, ExperienceLevel::EntryLevel),
    (3.0, ExperienceLevel::Junior),
    (7.0, ExperienceLevel::MidLevel),
    (12.0, ExperienceLevel::Senior),
    (18.0, ExperienceLevel::Manager),
    (25.0, ExperienceLevel::Director),
];

/// Level implied by an explicit seniority marker in the title, if any.
pub fn level_from_title(job_title: &str) -> Option<ExperienceLevel> {
    let tokens = title_tokens(job_title);
    let phrase = format!(" {} ", tokens.join(" "));

    TITLE_MARKERS
        .iter()
        .find(|(_, markers)| {
            markers.iter().any(|marker| {
                if marker.contains(' ') {
                    phrase.contains(&format!(" {marker} "))
                } else {
                    tokens.iter().any(|t| t.as_str() == *marker)
                }
            })
        })
        .map(|(level, _)| *level)
}

/// Level implied by years of experience alone.
pub fn level_from_years(years: f64) -> ExperienceLevel {
    YEARS_LADDER
        .iter()
        .find(|(upper, _)| years < *upper)
        .map(|(_, level)| *level)
        .unwrap_or(ExperienceLevel::Executive)
}

/// Deterministic classification: the title overrides the years ladder.
pub fn classify_by_rules(years: f64, job_title: &str) -> ExperienceLevel {
    level_from_title(job_title).unwrap_or_else(|| level_from_years(years))
}
