// Shared prompt constants.
// Classification and generation each keep their own prompts.rs alongside them.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt fragment for single-label classification calls.
pub const SINGLE_LABEL_SYSTEM: &str = "You are a precise classification assistant. \
    Respond with exactly one label on a single line. \
    Do NOT add explanations, punctuation, quotes or extra words.";
