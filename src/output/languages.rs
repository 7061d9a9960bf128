use std::collections::BTreeMap;
use std::io::Write;

use crate::aggregate::{AggregateRecord, LanguageBreakdown};
use crate::error::Result;
use crate::language::LanguageRegistry;

use super::number::write_total_line;
use super::{ReportFormatter, format_number};

const RULE_WIDTH: usize = 100;
const SUBTOTAL_RULE_WIDTH: usize = 50;

/// Per-directory, per-language totals with the context needed to label them.
pub struct LanguagesReport<'a> {
    pub root: String,
    pub breakdown: &'a LanguageBreakdown,
    pub registry: &'a LanguageRegistry,
    /// Friendly names for top-level directories.
    pub aliases: &'a BTreeMap<String, String>,
}

/// One language line of a report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow<'a> {
    pub tag: &'a str,
    pub name: String,
    pub totals: &'a AggregateRecord,
}

impl LanguagesReport<'_> {
    /// Heading for a top-level directory: `Alias (dir)` when aliased.
    #[must_use]
    pub fn directory_label(&self, dir: &str) -> String {
        match self.aliases.get(dir) {
            Some(alias) if alias != dir => format!("{alias} ({dir})"),
            _ => dir.to_string(),
        }
    }

    /// Rows for `totals`, ordered by display name.
    #[must_use]
    pub fn rows<'b>(&self, totals: &'b BTreeMap<String, AggregateRecord>) -> Vec<LanguageRow<'b>> {
        let mut rows: Vec<LanguageRow<'b>> = totals
            .iter()
            .map(|(tag, aggregate)| LanguageRow {
                tag: tag.as_str(),
                name: self.registry.display_name(tag),
                totals: aggregate,
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }
}

pub struct LanguagesTextFormatter;

impl ReportFormatter<LanguagesReport<'_>> for LanguagesTextFormatter {
    fn format(&self, report: &LanguagesReport<'_>) -> Result<String> {
        let rule = "=".repeat(RULE_WIDTH);
        let mut output = Vec::new();

        writeln!(output, "{rule}").ok();
        writeln!(output, "CODE LINE COUNT ANALYSIS REPORT").ok();
        writeln!(output, "{rule}").ok();
        writeln!(output).ok();

        for (dir, languages) in &report.breakdown.by_directory {
            writeln!(output).ok();
            writeln!(output, "{rule}").ok();
            writeln!(output, "DIRECTORY: {}", report.directory_label(dir)).ok();
            writeln!(output, "{rule}").ok();
            writeln!(output).ok();

            for row in report.rows(languages) {
                writeln!(output, "  {}:", row.name).ok();
                write_counts(&mut output, row.totals);
                writeln!(output).ok();
            }

            writeln!(output, "  {}", "-".repeat(SUBTOTAL_RULE_WIDTH)).ok();
            writeln!(output, "  DIRECTORY TOTAL:").ok();
            write_counts(&mut output, &report.breakdown.directory_total(dir));
            writeln!(output).ok();
        }

        writeln!(output).ok();
        writeln!(output, "{rule}").ok();
        writeln!(output, "SUMMARY BY LANGUAGE (Across All Directories)").ok();
        writeln!(output, "{rule}").ok();
        writeln!(output).ok();

        for row in report.rows(&report.breakdown.by_language) {
            writeln!(output, "  {}:", row.name).ok();
            write_counts(&mut output, row.totals);
            writeln!(output).ok();
        }

        let overall = &report.breakdown.overall;
        writeln!(output, "{rule}").ok();
        writeln!(output, "OVERALL TOTALS").ok();
        writeln!(output, "{rule}").ok();
        write_total_line(&mut output, "  ", "Total Files:", overall.files);
        write_total_line(&mut output, "  ", "Total Lines:", overall.counts.total);
        write_total_line(&mut output, "  ", "Total Code Lines:", overall.counts.code);
        write_total_line(&mut output, "  ", "Total Comment Lines:", overall.counts.comments);
        write_total_line(&mut output, "  ", "Total Blank Lines:", overall.counts.blank);
        if overall.unreadable > 0 {
            write_total_line(&mut output, "  ", "Unreadable Files:", overall.unreadable);
        }
        writeln!(output, "{rule}").ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

fn write_counts(output: &mut Vec<u8>, totals: &AggregateRecord) {
    writeln!(output, "    Files:         {:>10}", format_number(totals.files)).ok();
    writeln!(output, "    Total Lines:   {:>10}", format_number(totals.counts.total)).ok();
    writeln!(output, "    Code Lines:    {:>10}", format_number(totals.counts.code)).ok();
    writeln!(output, "    Comment Lines: {:>10}", format_number(totals.counts.comments)).ok();
    writeln!(output, "    Blank Lines:   {:>10}", format_number(totals.counts.blank)).ok();
    if totals.unreadable > 0 {
        writeln!(output, "    Unreadable:    {:>10}", format_number(totals.unreadable)).ok();
    }
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
