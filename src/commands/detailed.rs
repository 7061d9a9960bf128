use std::path::PathBuf;

use tracing::{info, warn};

use crate::aggregate::DirectoryTree;
use crate::cli::{Cli, DetailedArgs};
use crate::config::normalize_extension;
use crate::counter::{FileReader, LineClassifier, RealFileReader};
use crate::error::{LineTallyError, Result};
use crate::language::LanguageRegistry;
use crate::output::{DetailedReport, DetailedTextFormatter, OutputFormat, display_root};
use crate::scanner::DirectoryScanner;

use super::context::{
    apply_report_overrides, collect_records, exit_code, load_config, report_path, write_report,
};

/// `detailed`: directory tree and largest files for a single language.
#[must_use]
pub fn run_detailed(args: &DetailedArgs, cli: &Cli) -> i32 {
    exit_code(run_detailed_impl(args, cli))
}

/// Build the report, print it and save it.
///
/// # Errors
/// Returns an error for configuration problems or if the report file cannot be written.
pub fn run_detailed_impl(args: &DetailedArgs, cli: &Cli) -> Result<()> {
    let (content, report_file) = build_detailed_report(args, cli, &RealFileReader)?;
    write_report(&content, report_file.as_deref())
}

/// Render the `detailed` report, returning it with the report file path.
///
/// # Errors
/// Returns an error for configuration problems or an unusable root.
pub fn build_detailed_report(
    args: &DetailedArgs,
    cli: &Cli,
    reader: &dyn FileReader,
) -> Result<(String, Option<PathBuf>)> {
    let root = &args.report.root;
    let mut config = load_config(root, cli.config.as_deref(), cli.no_config)?;
    apply_report_overrides(&mut config, &args.report);

    let tag = normalize_extension(&args.lang);
    if tag.is_empty() {
        return Err(LineTallyError::Config("--lang must not be empty".to_string()));
    }
    let top = match args.top {
        Some(top) => usize::try_from(top).unwrap_or(usize::MAX),
        None => config.report.top_files,
    };

    let registry = LanguageRegistry::with_custom_languages(&config.languages)?;
    if registry.rules_for(&tag).is_empty() {
        warn!(lang = %tag, "no comment rules for this language, non-blank lines count as code");
    }
    let classifier = LineClassifier::new(&registry);
    let scanner = DirectoryScanner::from_config(&config.scanner, std::slice::from_ref(&tag))?;

    let records = collect_records(root, &scanner, &classifier, reader, cli.quiet)?;
    let tree = DirectoryTree::build(records);
    info!(
        files = tree.totals().files,
        unreadable = tree.totals().unreadable,
        lang = %tag,
        "built directory tree"
    );

    let report = DetailedReport {
        root: display_root(root),
        tree: &tree,
        language: registry.display_name(&tag),
        top,
    };
    let content =
        OutputFormat::from(args.report.format).render(&DetailedTextFormatter, &report)?;

    Ok((content, report_path(&args.report, &config.report.detailed_file)))
}

#[cfg(test)]
#[path = "detailed_tests.rs"]
mod tests;
