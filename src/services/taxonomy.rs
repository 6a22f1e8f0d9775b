use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::{AppError, AppResult};

/// The subject/topic catalogue offered to students. Loaded once from a JSON
/// file at process start and passed explicitly through application state;
/// immutable afterwards.
pub struct SubjectTaxonomy {
    subjects: BTreeMap<String, Vec<String>>,
}

impl SubjectTaxonomy {
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::InternalError(format!(
                "Failed to read subjects file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let subjects: BTreeMap<String, Vec<String>> = serde_json::from_str(&raw).map_err(|e| {
            AppError::InternalError(format!(
                "Subjects file '{}' is not valid JSON: {}",
                path.display(),
                e
            ))
        })?;

        log::info!("loaded {} subjects from {}", subjects.len(), path.display());
        Ok(Self { subjects })
    }

    pub fn from_map(subjects: BTreeMap<String, Vec<String>>) -> Self {
        Self { subjects }
    }

    pub fn subjects(&self) -> &BTreeMap<String, Vec<String>> {
        &self.subjects
    }

    /// Unknown subjects yield an empty topic list, not an error.
    pub fn topics_for(&self, subject: &str) -> &[String] {
        self.subjects
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
