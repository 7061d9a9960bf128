use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{LineTallyError, Result};

/// Extensions counted when no configuration overrides them.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "cs", "ts", "tsx", "js", "jsx", "css", "scss", "html", "xml", "xaml", "json", "py", "robot",
];

/// Build, version-control and dependency directories pruned from every walk.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    "bin",
    "obj",
    "dist",
];

pub const DEFAULT_TOP_FILES: usize = 50;
pub const DEFAULT_LANGUAGES_REPORT: &str = "line_count_report.txt";
pub const DEFAULT_DETAILED_REPORT: &str = "detailed_report.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub report: ReportConfig,

    /// Extra or replacement languages keyed by tag [languages.X].
    #[serde(default)]
    pub languages: HashMap<String, CustomLanguageConfig>,
}

/// Which files the walk visits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Extension allow-list (without the dot, case-insensitive).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names pruned wherever they appear below the root.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// Glob patterns for files to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            skip_dirs: default_skip_dirs(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Entries in the "largest files" ranking.
    #[serde(default = "default_top_files")]
    pub top_files: usize,

    /// Report file written under the root by `languages`.
    #[serde(default = "default_languages_file")]
    pub languages_file: String,

    /// Report file written under the root by `detailed`.
    #[serde(default = "default_detailed_file")]
    pub detailed_file: String,

    /// Friendly names for top-level directories.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_files: DEFAULT_TOP_FILES,
            languages_file: default_languages_file(),
            detailed_file: default_detailed_file(),
            aliases: BTreeMap::new(),
        }
    }
}

/// Custom language definition [languages.X].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CustomLanguageConfig {
    /// Display name; defaults to the upper-cased tag.
    #[serde(default)]
    pub name: Option<String>,

    /// Regexes matched at the start of a trimmed line.
    #[serde(default)]
    pub single_line: Vec<String>,

    /// Regexes matched against whole file content.
    #[serde(default)]
    pub multi_line: Vec<String>,
}

impl Config {
    /// Normalize extensions and check value ranges.
    ///
    /// # Errors
    /// Returns a `Config` error for out-of-range or empty values.
    pub fn validate(mut self) -> Result<Self> {
        if self.report.top_files == 0 {
            return Err(LineTallyError::Config(
                "report.top_files must be at least 1".to_string(),
            ));
        }
        if self.report.languages_file.trim().is_empty()
            || self.report.detailed_file.trim().is_empty()
        {
            return Err(LineTallyError::Config(
                "report file names must not be empty".to_string(),
            ));
        }

        self.scanner.extensions = self
            .scanner
            .extensions
            .iter()
            .map(|e| normalize_extension(e))
            .filter(|e| !e.is_empty())
            .collect();

        self.languages = self
            .languages
            .into_iter()
            .map(|(tag, lang)| (normalize_extension(&tag), lang))
            .collect();

        Ok(self)
    }

    /// Allow-list extensions plus the tags of custom languages.
    #[must_use]
    pub fn effective_extensions(&self) -> Vec<String> {
        let mut extensions = self.scanner.extensions.clone();
        let mut custom: Vec<&String> = self.languages.keys().collect();
        custom.sort();
        for tag in custom {
            if !extensions.contains(tag) {
                extensions.push(tag.clone());
            }
        }
        extensions
    }
}

/// Lower-case an extension and drop a leading dot.
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

fn default_skip_dirs() -> Vec<String> {
    DEFAULT_SKIP_DIRS.iter().map(ToString::to_string).collect()
}

const fn default_top_files() -> usize {
    DEFAULT_TOP_FILES
}

fn default_languages_file() -> String {
    DEFAULT_LANGUAGES_REPORT.to_string()
}

fn default_detailed_file() -> String {
    DEFAULT_DETAILED_REPORT.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
