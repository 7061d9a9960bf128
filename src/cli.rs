use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Report serialization selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatChoice {
    /// Plain-text report (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatChoice> for OutputFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Text => Self::Text,
            FormatChoice::Json => Self::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "line-tally")]
#[command(author, version, about = "Tally code, comment and blank lines in a source tree")]
#[command(long_about = "Walks a source tree and classifies every line of the selected \
    languages as code, comment or blank.\n\n\
    Exit codes:\n  \
    0 - Report produced\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file (default: <ROOT>/.line-tally.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Per-directory, per-language line counts
    Languages(LanguagesArgs),

    /// Directory tree and largest files for one language
    Detailed(DetailedArgs),
}

/// Options shared by both report modes.
#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    /// Directory to scan
    #[arg(env = "LINE_TALLY_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Exclude files matching this glob (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatChoice,

    /// Report file (default: a file under ROOT named in the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the report without writing a report file
    #[arg(long, conflicts_with = "output")]
    pub no_report_file: bool,
}

#[derive(Parser, Debug)]
pub struct LanguagesArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Override the extension allow-list (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,
}

#[derive(Parser, Debug)]
pub struct DetailedArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Language tag to analyze
    #[arg(short, long, default_value = "cs")]
    pub lang: String,

    /// Number of entries in the largest-files ranking
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub top: Option<u64>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
