use std::path::Path;

/// Root-relative path with `/` separators; `.` for the root itself.
#[must_use]
pub fn display_path(path: &Path) -> String {
    let normalized = normalize_separators(&path.to_string_lossy());
    if normalized.is_empty() {
        ".".to_string()
    } else {
        normalized
    }
}

/// Absolute form of the scan root for report headers, or the path as given
/// when it cannot be resolved.
#[must_use]
pub fn display_root(root: &Path) -> String {
    let resolved = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    normalize_separators(&resolved.to_string_lossy())
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
