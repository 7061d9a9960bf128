use std::path::Path;

use super::*;

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn filter_by_extension() {
    let filter = GlobFilter::new(&exts(&["cs"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("src/Program.cs")));
    assert!(!filter.should_include(Path::new("src/main.py")));
}

#[test]
fn extension_match_ignores_case() {
    let filter = GlobFilter::new(&exts(&["CS", "xaml"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("App.XAML")));
    assert!(filter.should_include(Path::new("Program.Cs")));
}

#[test]
fn files_without_extension_are_rejected() {
    let filter = GlobFilter::new(&exts(&["cs"]), &[]).unwrap();

    assert!(!filter.should_include(Path::new("Makefile")));
    assert!(!filter.should_include(Path::new(".gitignore")));
}

#[test]
fn empty_allow_list_accepts_nothing() {
    let filter = GlobFilter::new(&[], &[]).unwrap();
    assert!(!filter.should_include(Path::new("main.cs")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = GlobFilter::new(
        &exts(&["cs"]),
        &["**/Migrations/**".to_string(), "**/*.Designer.cs".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("Api/Controllers/Home.cs")));
    assert!(!filter.should_include(Path::new("Api/Migrations/0001_Init.cs")));
    assert!(!filter.should_include(Path::new("Forms/Main.Designer.cs")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = GlobFilter::new(&[], &["[invalid".to_string()]);
    assert!(matches!(
        result,
        Err(LineTallyError::InvalidPattern { .. })
    ));
}

#[test]
fn extension_tag_is_lowercase() {
    assert_eq!(extension_tag(Path::new("a/B.TSX")), Some("tsx".to_string()));
    assert_eq!(extension_tag(Path::new("README")), None);
}
