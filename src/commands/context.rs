use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::aggregate::FileRecord;
use crate::cli::ReportArgs;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::counter::{FileReader, LineClassifier};
use crate::error::{LineTallyError, Result};
use crate::output::{ScanProgress, print_error_full};
use crate::scanner::{FileScanner, extension_tag};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

/// Load configuration as selected by the global flags.
///
/// `--no-config` yields defaults, `--config` names a file, and otherwise
/// `<root>/.line-tally.toml` is used when present.
///
/// # Errors
/// Returns an error if the selected file cannot be read, parsed or validated.
pub fn load_config(root: &Path, config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        debug!("configuration loading disabled");
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(root),
    }
}

/// Merge the flags shared by both modes into `config`.
pub fn apply_report_overrides(config: &mut Config, args: &ReportArgs) {
    config
        .scanner
        .exclude
        .extend(args.exclude.iter().cloned());
}

/// Scan `root`, then read and classify each file in walk order.
///
/// Files that cannot be read are logged and kept as zero-valued records.
///
/// # Errors
/// Returns an error if the root is not a directory.
pub fn collect_records(
    root: &Path,
    scanner: &dyn FileScanner,
    classifier: &LineClassifier<'_>,
    reader: &dyn FileReader,
    quiet: bool,
) -> Result<Vec<FileRecord>> {
    let scan = scanner.scan(root)?;
    info!(
        files = scan.files.len(),
        skipped_dirs = scan.errors.len(),
        "scan complete"
    );

    let progress = ScanProgress::new(scan.files.len() as u64, quiet);
    let mut records = Vec::with_capacity(scan.files.len());

    for path in &scan.files {
        let Some(tag) = extension_tag(path) else {
            progress.inc();
            continue;
        };
        let relative = path.strip_prefix(root).unwrap_or(path);

        let record = match classifier.classify_file(reader, path, &tag) {
            Ok(counts) => {
                debug!(
                    path = %relative.display(),
                    code = counts.code,
                    comments = counts.comments,
                    blank = counts.blank,
                    "classified"
                );
                FileRecord::new(relative, &tag, counts)
            }
            Err(e) => {
                progress.suspend(|| {
                    warn!(path = %path.display(), cause = %e, "cannot read file, counting as zero");
                });
                FileRecord::unreadable(relative, &tag)
            }
        };
        records.push(record);
        progress.inc();
    }

    progress.finish();
    Ok(records)
}

/// Where the report file goes, if anywhere.
#[must_use]
pub fn report_path(args: &ReportArgs, default_name: &str) -> Option<PathBuf> {
    if args.no_report_file {
        return None;
    }
    Some(
        args.output
            .clone()
            .unwrap_or_else(|| args.root.join(default_name)),
    )
}

/// Print the report to stdout and save it to `path` when given.
///
/// # Errors
/// Returns `ReportWrite` if the file cannot be written.
pub fn write_report(content: &str, path: Option<&Path>) -> Result<()> {
    print!("{content}");
    if !content.ends_with('\n') {
        println!();
    }
    if let Some(path) = path {
        save_report(content, path)?;
        info!(path = %path.display(), "report saved");
    }
    Ok(())
}

pub(crate) fn save_report(content: &str, path: &Path) -> Result<()> {
    let to_error = |source: std::io::Error| LineTallyError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, content).map_err(to_error)
}

/// Turn a command result into an exit code, printing the error to stderr.
pub(crate) fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error_full(e.error_type(), &e.to_string(), e.detail().as_deref());
            EXIT_CONFIG_ERROR
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
