mod context;
mod detailed;
mod languages;

pub use context::{
    apply_report_overrides, collect_records, load_config, report_path, write_report,
};
pub use detailed::{build_detailed_report, run_detailed, run_detailed_impl};
pub use languages::{build_languages_report, run_languages, run_languages_impl};
