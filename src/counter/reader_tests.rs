use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::counter::test_fixtures::MapReader;
use crate::language::LanguageRegistry;

#[test]
fn read_source_returns_text() {
    let reader = MapReader::default().with("a.cs", b"int x;\n");
    let text = read_source(&reader, Path::new("a.cs")).unwrap();
    assert_eq!(text, "int x;\n");
}

#[test]
fn read_source_strips_byte_order_mark() {
    let reader = MapReader::default().with("a.cs", b"\xEF\xBB\xBF// header\n");
    let text = read_source(&reader, Path::new("a.cs")).unwrap();
    assert_eq!(text, "// header\n");
}

#[test]
fn missing_file_is_a_read_error() {
    let reader = MapReader::default();
    let err = read_source(&reader, Path::new("gone.cs")).unwrap_err();

    assert!(matches!(err, LineTallyError::FileRead { .. }));
    assert!(err.to_string().contains("gone.cs"));
}

#[test]
fn invalid_utf8_is_an_encoding_error() {
    let reader = MapReader::default().with("bin.js", &[0x66, 0xFF, 0xFE, 0x0A]);
    let err = read_source(&reader, Path::new("bin.js")).unwrap_err();

    assert!(matches!(err, LineTallyError::InvalidEncoding { .. }));
}

#[test]
fn classify_file_distinguishes_empty_from_unreadable() {
    let registry = LanguageRegistry::default();
    let classifier = LineClassifier::new(&registry);
    let reader = MapReader::default().with("empty.cs", b"");

    let empty = classifier
        .classify_file(&reader, Path::new("empty.cs"), "cs")
        .unwrap();
    assert_eq!(empty, LineCountRecord::new(0, 0, 1));

    assert!(
        classifier
            .classify_file(&reader, Path::new("missing.cs"), "cs")
            .is_err()
    );
}

#[test]
fn classify_file_reads_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Program.cs");
    std::fs::write(&path, "// entry\nclass P {}\n").unwrap();

    let registry = LanguageRegistry::default();
    let classifier = LineClassifier::new(&registry);
    let record = classifier.classify_file(&RealFileReader, &path, "cs").unwrap();

    assert_eq!(record, LineCountRecord::new(1, 1, 1));
}
