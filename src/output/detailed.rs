use std::io::Write;

use crate::aggregate::{AggregateRecord, DirectoryNode, DirectoryTree, FileRecord, ROOT_GROUP};
use crate::error::Result;

use super::number::write_total_line;
use super::{ReportFormatter, display_path, format_number};

const RULE_WIDTH: usize = 120;
const FILE_RULE_WIDTH: usize = 115;
const MIN_RULE_WIDTH: usize = 20;
const NAME_WIDTH: usize = 60;
const UNREADABLE_MARKER: &str = " (unreadable)";

/// Directory tree of a single language, plus the size of the ranking.
pub struct DetailedReport<'a> {
    pub root: String,
    pub tree: &'a DirectoryTree,
    /// Display name of the language, e.g. `C#`.
    pub language: String,
    pub top: usize,
}

pub struct DetailedTextFormatter;

impl ReportFormatter<DetailedReport<'_>> for DetailedTextFormatter {
    fn format(&self, report: &DetailedReport<'_>) -> Result<String> {
        let language = report.language.to_uppercase();
        let rule = "=".repeat(RULE_WIDTH);
        let mut output = Vec::new();

        writeln!(output, "{rule}").ok();
        writeln!(output, "DETAILED {language} CODE ANALYSIS BY DIRECTORY AND FILE").ok();
        writeln!(output, "{rule}").ok();
        writeln!(output).ok();

        let root = report.tree.root();
        if !root.files.is_empty() {
            let own = AggregateRecord::from_files(&root.files);
            write_section(&mut output, ROOT_GROUP, &own, &root.files_by_code(), 0);
        }
        for child in root.children.values() {
            write_directory(&mut output, child, 0);
        }

        let overall = report.tree.totals();
        writeln!(output).ok();
        writeln!(output, "{rule}").ok();
        writeln!(output, "OVERALL {language} TOTALS").ok();
        writeln!(output, "{rule}").ok();
        write_total_line(&mut output, "", "Total Files:", overall.files);
        write_total_line(&mut output, "", "Total Lines:", overall.counts.total);
        write_total_line(&mut output, "", "Total Code Lines:", overall.counts.code);
        write_total_line(&mut output, "", "Total Comment Lines:", overall.counts.comments);
        write_total_line(&mut output, "", "Total Blank Lines:", overall.counts.blank);
        if overall.unreadable > 0 {
            write_total_line(&mut output, "", "Unreadable Files:", overall.unreadable);
        }
        writeln!(output, "{rule}").ok();

        writeln!(output).ok();
        writeln!(output).ok();
        write_largest_files(&mut output, report, &language);

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

fn write_directory(output: &mut Vec<u8>, node: &DirectoryNode, indent: usize) {
    write_section(output, &node.name, &node.totals, &node.files_by_code(), indent);
    for child in node.children.values() {
        write_directory(output, child, indent + 1);
    }
}

fn write_section(
    output: &mut Vec<u8>,
    name: &str,
    totals: &AggregateRecord,
    files: &[&FileRecord],
    indent: usize,
) {
    let prefix = "  ".repeat(indent);
    let rule = "=".repeat(rule_width(RULE_WIDTH, indent));

    writeln!(output, "{prefix}{rule}").ok();
    writeln!(output, "{prefix}DIRECTORY: {name}").ok();
    write!(
        output,
        "{prefix}Files: {} | Total: {} | Code: {} | Comments: {} | Blank: {}",
        format_number(totals.files),
        format_number(totals.counts.total),
        format_number(totals.counts.code),
        format_number(totals.counts.comments),
        format_number(totals.counts.blank)
    )
    .ok();
    if totals.unreadable > 0 {
        write!(output, " | Unreadable: {}", format_number(totals.unreadable)).ok();
    }
    writeln!(output).ok();
    writeln!(output, "{prefix}{rule}").ok();
    writeln!(output).ok();

    if files.is_empty() {
        return;
    }

    writeln!(output, "{prefix}  FILES IN THIS DIRECTORY:").ok();
    writeln!(output, "{prefix}  {}", "-".repeat(rule_width(FILE_RULE_WIDTH, indent))).ok();
    for file in files {
        writeln!(
            output,
            "{prefix}    {:<NAME_WIDTH$} | Total: {:>8} | Code: {:>8} | Cmts: {:>8} | Blank: {:>8}{}",
            file.file_name(),
            format_number(file.counts.total),
            format_number(file.counts.code),
            format_number(file.counts.comments),
            format_number(file.counts.blank),
            marker(file)
        )
        .ok();
    }
    writeln!(output).ok();
}

fn write_largest_files(output: &mut Vec<u8>, report: &DetailedReport<'_>, language: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(output, "{rule}").ok();
    writeln!(output, "TOP {} LARGEST {language} FILES BY CODE LINES", report.top).ok();
    writeln!(output, "{rule}").ok();
    writeln!(output).ok();

    for (index, file) in report.tree.largest_files(report.top).iter().enumerate() {
        writeln!(output, "{:>3}. {}{}", index + 1, display_path(&file.path), marker(file)).ok();
        writeln!(
            output,
            "     Total: {:>8} | Code: {:>8} | Comments: {:>8} | Blank: {:>8}",
            format_number(file.counts.total),
            format_number(file.counts.code),
            format_number(file.counts.comments),
            format_number(file.counts.blank)
        )
        .ok();
        writeln!(output).ok();
    }
}

const fn marker(file: &FileRecord) -> &'static str {
    if file.unreadable { UNREADABLE_MARKER } else { "" }
}

fn rule_width(base: usize, indent: usize) -> usize {
    base.saturating_sub(indent * 2).max(MIN_RULE_WIDTH)
}

#[cfg(test)]
#[path = "detailed_tests.rs"]
mod tests;
