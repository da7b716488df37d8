// Attribute classification: industry and experience level for a job title.
// LLM first, keyword/years rules as the fallback. Fallback tables are plain
// static data so they can be tested without any LLM.

pub mod classifier;
pub mod experience;
pub mod industry;
pub mod prompts;

pub use classifier::AttributeClassifier;

/// Lowercase alphanumeric words of a job title: "Sr. Dev-Ops" -> ["sr", "dev", "ops"].
pub(crate) fn title_tokens(title: &str) -> Vec<String> {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_tokens_split_on_punctuation() {
        assert_eq!(title_tokens("Sr. Dev-Ops"), vec!["sr", "dev", "ops"]);
        assert_eq!(title_tokens("VP, Sales & Marketing"), vec!["vp", "sales", "marketing"]);
        assert!(title_tokens("  ").is_empty());
    }
}
