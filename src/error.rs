use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineTallyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("Failed to read directory: {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid comment pattern: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LineTallyError {
    /// Short category name used in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::InvalidEncoding { .. } => "FileRead",
            Self::DirectoryRead { .. } => "DirectoryRead",
            Self::InvalidPattern { .. } | Self::InvalidRegex { .. } => "Pattern",
            Self::ReportWrite { .. } => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Message of the wrapped cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::ReportWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::DirectoryRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::InvalidRegex { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LineTallyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
