use tracing::info;

use crate::aggregate::LanguageBreakdown;
use crate::cli::{Cli, LanguagesArgs};
use crate::config::normalize_extension;
use crate::counter::{FileReader, LineClassifier, RealFileReader};
use crate::error::Result;
use crate::language::LanguageRegistry;
use crate::output::{LanguagesReport, LanguagesTextFormatter, OutputFormat, display_root};
use crate::scanner::DirectoryScanner;

use super::context::{
    apply_report_overrides, collect_records, exit_code, load_config, report_path, write_report,
};

/// `languages`: totals per top-level directory and language.
#[must_use]
pub fn run_languages(args: &LanguagesArgs, cli: &Cli) -> i32 {
    exit_code(run_languages_impl(args, cli))
}

/// Build the report, print it and save it.
///
/// # Errors
/// Returns an error for configuration problems or if the report file cannot be written.
pub fn run_languages_impl(args: &LanguagesArgs, cli: &Cli) -> Result<()> {
    let (content, report_file) = build_languages_report(args, cli, &RealFileReader)?;
    write_report(&content, report_file.as_deref())
}

/// Render the `languages` report, returning it with the report file path.
///
/// # Errors
/// Returns an error for configuration problems or an unusable root.
pub fn build_languages_report(
    args: &LanguagesArgs,
    cli: &Cli,
    reader: &dyn FileReader,
) -> Result<(String, Option<std::path::PathBuf>)> {
    let root = &args.report.root;
    let mut config = load_config(root, cli.config.as_deref(), cli.no_config)?;
    apply_report_overrides(&mut config, &args.report);
    if let Some(ext) = &args.ext {
        config.scanner.extensions = ext
            .iter()
            .map(|e| normalize_extension(e))
            .filter(|e| !e.is_empty())
            .collect();
    }

    let registry = LanguageRegistry::with_custom_languages(&config.languages)?;
    let classifier = LineClassifier::new(&registry);
    let scanner = DirectoryScanner::from_config(&config.scanner, &config.effective_extensions())?;

    let records = collect_records(root, &scanner, &classifier, reader, cli.quiet)?;
    let breakdown = LanguageBreakdown::from_files(&records);
    info!(
        files = breakdown.overall.files,
        unreadable = breakdown.overall.unreadable,
        directories = breakdown.by_directory.len(),
        "aggregated by directory and language"
    );

    let report = LanguagesReport {
        root: display_root(root),
        breakdown: &breakdown,
        registry: &registry,
        aliases: &config.report.aliases,
    };
    let content =
        OutputFormat::from(args.report.format).render(&LanguagesTextFormatter, &report)?;

    Ok((content, report_path(&args.report, &config.report.languages_file)))
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
