mod filter;

pub use filter::{FileFilter, GlobFilter, extension_tag};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScannerConfig;
use crate::error::{LineTallyError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// Unreadable directories below the root are skipped and reported in the
    /// result rather than failing the scan.
    ///
    /// # Errors
    /// Returns an error if the root is not a directory.
    fn scan(&self, root: &Path) -> Result<ScanResult>;
}

#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files in walk order (sorted by name within each directory).
    pub files: Vec<PathBuf>,
    /// Entries the walk could not read; their subtrees were skipped.
    pub errors: Vec<LineTallyError>,
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    skip_dirs: HashSet<String>,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub fn new(filter: F, skip_dirs: &[String]) -> Self {
        Self {
            filter,
            skip_dirs: skip_dirs.iter().cloned().collect(),
        }
    }

    fn is_skipped_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.skip_dirs.contains(name))
    }

    fn scan_impl(&self, root: &Path) -> ScanResult {
        let mut result = ScanResult::default();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_skipped_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    let path = source.path().unwrap_or(root).to_path_buf();
                    warn!(
                        path = %path.display(),
                        cause = %source,
                        "cannot read directory, skipping"
                    );
                    result
                        .errors
                        .push(LineTallyError::DirectoryRead { path, source });
                    continue;
                }
            };

            // Symlinked files are counted; symlinked directories are not followed.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if self.filter.should_include(relative) {
                result.files.push(entry.into_path());
            }
        }

        debug!(
            files = result.files.len(),
            errors = result.errors.len(),
            "scan finished"
        );
        result
    }
}

impl DirectoryScanner<GlobFilter> {
    /// Scanner for the given allow-list using the config's skip and exclude lists.
    ///
    /// # Errors
    /// Returns an error if an exclude pattern is invalid.
    pub fn from_config(config: &ScannerConfig, extensions: &[String]) -> Result<Self> {
        let filter = GlobFilter::new(extensions, &config.exclude)?;
        Ok(Self::new(filter, &config.skip_dirs))
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<ScanResult> {
        if !root.is_dir() {
            return Err(LineTallyError::Config(format!(
                "scan root is not a directory: {}",
                root.display()
            )));
        }
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
