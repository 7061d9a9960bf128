use serde::Serialize;

use crate::aggregate::{AggregateRecord, DirectoryNode, FileRecord};
use crate::counter::LineCountRecord;
use crate::error::Result;

use super::{DetailedReport, LanguageRow, LanguagesReport, ReportFormatter, display_path};

/// Pretty-printed JSON for either report mode.
pub struct JsonFormatter;

#[derive(Serialize)]
struct LanguagesOutput<'a> {
    root: &'a str,
    directories: Vec<DirectoryOutput>,
    languages: Vec<LanguageOutput>,
    overall: AggregateRecord,
}

#[derive(Serialize)]
struct DirectoryOutput {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    languages: Vec<LanguageOutput>,
    total: AggregateRecord,
}

#[derive(Serialize)]
struct LanguageOutput {
    tag: String,
    name: String,
    #[serde(flatten)]
    totals: AggregateRecord,
}

impl From<LanguageRow<'_>> for LanguageOutput {
    fn from(row: LanguageRow<'_>) -> Self {
        Self {
            tag: row.tag.to_string(),
            name: row.name,
            totals: *row.totals,
        }
    }
}

#[derive(Serialize)]
struct DetailedOutput<'a> {
    root: &'a str,
    language: &'a str,
    tree: NodeOutput,
    overall: AggregateRecord,
    largest_files: Vec<FileOutput>,
}

#[derive(Serialize)]
struct NodeOutput {
    name: String,
    totals: AggregateRecord,
    files: Vec<FileOutput>,
    children: Vec<NodeOutput>,
}

#[derive(Serialize)]
struct FileOutput {
    path: String,
    language: String,
    unreadable: bool,
    #[serde(flatten)]
    counts: LineCountRecord,
}

impl From<&FileRecord> for FileOutput {
    fn from(file: &FileRecord) -> Self {
        Self {
            path: display_path(&file.path),
            language: file.language.clone(),
            unreadable: file.unreadable,
            counts: file.counts,
        }
    }
}

impl From<&DirectoryNode> for NodeOutput {
    fn from(node: &DirectoryNode) -> Self {
        Self {
            name: node.name.clone(),
            totals: node.totals,
            files: node.files_by_code().into_iter().map(FileOutput::from).collect(),
            children: node.children.values().map(Self::from).collect(),
        }
    }
}

impl ReportFormatter<LanguagesReport<'_>> for JsonFormatter {
    fn format(&self, report: &LanguagesReport<'_>) -> Result<String> {
        let directories = report
            .breakdown
            .by_directory
            .iter()
            .map(|(dir, languages)| DirectoryOutput {
                name: dir.clone(),
                alias: report.aliases.get(dir).cloned(),
                languages: report.rows(languages).into_iter().map(Into::into).collect(),
                total: report.breakdown.directory_total(dir),
            })
            .collect();

        let output = LanguagesOutput {
            root: &report.root,
            directories,
            languages: report
                .rows(&report.breakdown.by_language)
                .into_iter()
                .map(Into::into)
                .collect(),
            overall: report.breakdown.overall,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

impl ReportFormatter<DetailedReport<'_>> for JsonFormatter {
    fn format(&self, report: &DetailedReport<'_>) -> Result<String> {
        let output = DetailedOutput {
            root: &report.root,
            language: &report.language,
            tree: NodeOutput::from(report.tree.root()),
            overall: report.tree.totals(),
            largest_files: report
                .tree
                .largest_files(report.top)
                .into_iter()
                .map(FileOutput::from)
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
