use std::collections::BTreeMap;
use std::path::{Component, Path};

use super::{AggregateRecord, FileRecord};

/// Group name for files that sit directly in the scan root.
pub const ROOT_GROUP: &str = ".";

/// Totals keyed by top-level directory and language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBreakdown {
    /// top-level directory -> language tag -> totals
    pub by_directory: BTreeMap<String, BTreeMap<String, AggregateRecord>>,
    /// language tag -> totals across all directories
    pub by_language: BTreeMap<String, AggregateRecord>,
    pub overall: AggregateRecord,
}

impl LanguageBreakdown {
    #[must_use]
    pub fn from_files<'a>(files: impl IntoIterator<Item = &'a FileRecord>) -> Self {
        let mut breakdown = Self::default();
        for file in files {
            breakdown.add(file);
        }
        breakdown
    }

    pub fn add(&mut self, file: &FileRecord) {
        self.by_directory
            .entry(top_level_group(&file.path))
            .or_default()
            .entry(file.language.clone())
            .or_default()
            .add(file);
        self.by_language
            .entry(file.language.clone())
            .or_default()
            .add(file);
        self.overall.add(file);
    }

    /// Totals for one top-level directory across its languages.
    #[must_use]
    pub fn directory_total(&self, directory: &str) -> AggregateRecord {
        let mut total = AggregateRecord::default();
        if let Some(languages) = self.by_directory.get(directory) {
            for aggregate in languages.values() {
                total.merge(aggregate);
            }
        }
        total
    }
}

/// First path component of a root-relative path, or [`ROOT_GROUP`] for files in the root.
#[must_use]
pub fn top_level_group(path: &Path) -> String {
    let mut normal = path.components().filter_map(|c| match c {
        Component::Normal(name) => Some(name),
        _ => None,
    });
    match (normal.next(), normal.next()) {
        (Some(first), Some(_)) => first.to_string_lossy().into_owned(),
        _ => ROOT_GROUP.to_string(),
    }
}

#[cfg(test)]
#[path = "breakdown_tests.rs"]
mod tests;
