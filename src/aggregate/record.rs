use std::path::PathBuf;

use serde::Serialize;

use crate::counter::LineCountRecord;

/// Classification result for one scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// Language tag (lower-cased extension).
    pub language: String,
    pub counts: LineCountRecord,
    /// The file could not be read; `counts` is all zeros.
    pub unreadable: bool,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, language: &str, counts: LineCountRecord) -> Self {
        Self {
            path: path.into(),
            language: language.to_string(),
            counts,
            unreadable: false,
        }
    }

    /// Zero-valued record standing in for a file that failed to read.
    #[must_use]
    pub fn unreadable(path: impl Into<PathBuf>, language: &str) -> Self {
        Self {
            path: path.into(),
            language: language.to_string(),
            counts: LineCountRecord::default(),
            unreadable: true,
        }
    }

    /// Final path component, for per-directory listings.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// Sum of the records of a group of files.
///
/// Unreadable files are part of the group: they add one to `files` and
/// `unreadable` and nothing to `counts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateRecord {
    pub files: usize,
    pub unreadable: usize,
    #[serde(flatten)]
    pub counts: LineCountRecord,
}

impl AggregateRecord {
    #[must_use]
    pub fn from_files<'a>(files: impl IntoIterator<Item = &'a FileRecord>) -> Self {
        let mut aggregate = Self::default();
        for file in files {
            aggregate.add(file);
        }
        aggregate
    }

    pub fn add(&mut self, file: &FileRecord) {
        self.files += 1;
        if file.unreadable {
            self.unreadable += 1;
        }
        self.counts += file.counts;
    }

    pub fn merge(&mut self, other: &Self) {
        self.files += other.files;
        self.unreadable += other.unreadable;
        self.counts += other.counts;
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files == 0
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
