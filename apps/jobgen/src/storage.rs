//! DocumentStore: writes validated documents as pretty-printed JSON files named
//! `<slug>_<YYYYmmdd_HHMMSS>.json` under the output directory. A name that is
//! already taken gets a `_1`, `_2`, ... suffix; existing files are never replaced.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::AppError;
use crate::models::GeneratedDocument;

/// Used when a job title has no filename-safe characters at all.
const FALLBACK_SLUG: &str = "job_description";

/// Slug length cap in bytes. Leaves room for the timestamp, suffix and extension
/// under the usual 255-byte filename limit.
const MAX_SLUG_BYTES: usize = 120;

/// Same-second saves of one title beyond this many give up.
const MAX_NAME_SUFFIX: u32 = 99;

pub struct DocumentStore {
    output_dir: PathBuf,
}

impl DocumentStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes the document and returns its path. Creates the output directory if needed.
    pub fn save(&self, document: &GeneratedDocument) -> Result<PathBuf, AppError> {
        self.save_at(document, Local::now())
    }

    fn save_at(
        &self,
        document: &GeneratedDocument,
        generated_at: DateTime<Local>,
    ) -> Result<PathBuf, AppError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            AppError::Storage(format!(
                "Failed to create output directory {}: {e}",
                self.output_dir.display()
            ))
        })?;

        let stem = format!(
            "{}_{}",
            slugify(&document.params.job_title),
            generated_at.format("%Y%m%d_%H%M%S")
        );
        let first_choice = self.output_dir.join(format!("{stem}.json"));

        // Write to a temp file beside the target, then rename, so a failure
        // never leaves a truncated document behind.
        let mut tmp = NamedTempFile::new_in(&self.output_dir)
            .map_err(|e| storage_error(&first_choice, e))?;
        serde_json::to_writer_pretty(&mut tmp, document)
            .map_err(|e| storage_error(&first_choice, e))?;
        tmp.write_all(b"\n")
            .map_err(|e| storage_error(&first_choice, e))?;

        for suffix in 0..=MAX_NAME_SUFFIX {
            let path = if suffix == 0 {
                first_choice.clone()
            } else {
                self.output_dir.join(format!("{stem}_{suffix}.json"))
            };

            match tmp.persist_noclobber(&path) {
                Ok(_) => {
                    info!("Job description saved to {}", path.display());
                    return Ok(path);
                }
                Err(e) if e.error.kind() == ErrorKind::AlreadyExists => tmp = e.file,
                Err(e) => return Err(storage_error(&path, e.error)),
            }
        }

        Err(AppError::Storage(format!(
            "Failed to write {}: more than {MAX_NAME_SUFFIX} documents share this name",
            first_choice.display()
        )))
    }
}

fn storage_error(path: &Path, e: impl std::fmt::Display) -> AppError {
    AppError::Storage(format!("Failed to write {}: {e}", path.display()))
}

/// Keeps alphanumerics, spaces and underscores, turns spaces into underscores,
/// lowercases: "Sr. C++ Engineer (Remote)" -> "sr_c_engineer_remote".
/// Capped at `MAX_SLUG_BYTES` on a character boundary.
pub fn slugify(job_title: &str) -> String {
    let mut slug = String::new();
    for c in job_title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .map(|c| if c == ' ' { '_' } else { c })
        .flat_map(char::to_lowercase)
    {
        if slug.len() + c.len_utf8() > MAX_SLUG_BYTES {
            break;
        }
        slug.push(c);
    }

    if slug.trim_matches('_').is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::generation::fixtures::WELL_FORMED_RESPONSE;
    use crate::generation::parse_document;

    #[test]
    fn test_slugify_matches_filename_rules() {
        assert_eq!(slugify("Software Engineer"), "software_engineer");
        assert_eq!(slugify("Sr. C++ Engineer (Remote)"), "sr_c_engineer_remote");
        assert_eq!(slugify("data_scientist II"), "data_scientist_ii");
        assert_eq!(slugify("Ingénieur Logiciel"), "ingénieur_logiciel");
        assert_eq!(slugify("!!!"), FALLBACK_SLUG);
    }

    #[test]
    fn test_save_writes_pretty_json_under_timestamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("output");
        let store = DocumentStore::new(&output_dir);
        let document = parse_document(WELL_FORMED_RESPONSE).unwrap();
        let when = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

        let path = store.save_at(&document, when).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "software_engineer_20260314_092653.json"
        );
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"timestamp\""));
        assert_eq!(parse_document(&written).unwrap(), document);
    }

    #[test]
    fn test_long_titles_are_capped() {
        let slug = slugify(&"Engineer ".repeat(60));
        assert!(slug.len() <= MAX_SLUG_BYTES);
        assert!(slug.starts_with("engineer_engineer_"));

        let slug = slugify(&"Ingénieur ".repeat(60));
        assert!(slug.len() <= MAX_SLUG_BYTES);
        assert!(slug.starts_with("ingénieur_"));
    }

    #[test]
    fn test_same_second_saves_do_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        let document = parse_document(WELL_FORMED_RESPONSE).unwrap();
        let when = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

        let first = store.save_at(&document, when).unwrap();
        let second = store.save_at(&document, when).unwrap();
        let third = store.save_at(&document, when).unwrap();

        assert_eq!(
            first.file_name().unwrap().to_str().unwrap(),
            "software_engineer_20260314_092653.json"
        );
        assert_eq!(
            second.file_name().unwrap().to_str().unwrap(),
            "software_engineer_20260314_092653_1.json"
        );
        assert_eq!(
            third.file_name().unwrap().to_str().unwrap(),
            "software_engineer_20260314_092653_2.json"
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_long_title_document_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        let mut document = parse_document(WELL_FORMED_RESPONSE).unwrap();
        document.params.job_title = "Principal ".repeat(100);

        let path = store.save(&document).unwrap();
        assert!(path.file_name().unwrap().len() < 255);
    }

    #[test]
    fn test_save_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        let document = parse_document(WELL_FORMED_RESPONSE).unwrap();

        store.save(&document).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
