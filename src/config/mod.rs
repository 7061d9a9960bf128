mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    Config, CustomLanguageConfig, DEFAULT_DETAILED_REPORT, DEFAULT_EXTENSIONS,
    DEFAULT_LANGUAGES_REPORT, DEFAULT_SKIP_DIRS, DEFAULT_TOP_FILES, ReportConfig, ScannerConfig,
    normalize_extension,
};
