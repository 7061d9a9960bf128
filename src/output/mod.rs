//! Report rendering for both modes, plus terminal helpers.

mod detailed;
mod error_output;
mod json;
mod languages;
mod number;
mod path;
mod progress;

pub use detailed::{DetailedReport, DetailedTextFormatter};
pub use error_output::{ErrorOutput, print_error_full};
pub use json::JsonFormatter;
pub use languages::{LanguageRow, LanguagesReport, LanguagesTextFormatter};
pub use number::format_number;
pub use path::{display_path, display_root};
pub use progress::ScanProgress;

use crate::error::Result;

/// Renders one kind of report into a string.
pub trait ReportFormatter<R> {
    /// Format the report.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, report: &R) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Render `report` with the text or JSON formatter.
    ///
    /// # Errors
    /// Returns an error if the chosen formatter fails.
    pub fn render<R, T>(self, text: &T, report: &R) -> Result<String>
    where
        T: ReportFormatter<R>,
        JsonFormatter: ReportFormatter<R>,
    {
        match self {
            Self::Text => text.format(report),
            Self::Json => JsonFormatter.format(report),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
