// Job description generation.
// Implements: prompt synthesis, the generation call, response validation.
// All LLM calls go through llm_client::TextCompletionService.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod generator;
pub mod prompts;
pub mod synthesizer;
pub mod validator;

pub use generator::DocumentGenerator;
pub use validator::{parse_document, pin_request_echo};
