pub mod document;
pub mod job;

pub use document::GeneratedDocument;
pub use job::{ClassificationResult, ExperienceLevel, JobRequest};
