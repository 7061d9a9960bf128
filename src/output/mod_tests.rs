use std::collections::BTreeMap;

use super::*;
use crate::aggregate::{FileRecord, LanguageBreakdown};
use crate::counter::LineCountRecord;
use crate::language::LanguageRegistry;

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn render_dispatches_on_format() {
    let files = vec![FileRecord::new("src/a.py", "py", LineCountRecord::new(3, 1, 0))];
    let breakdown = LanguageBreakdown::from_files(&files);
    let registry = LanguageRegistry::default();
    let aliases = BTreeMap::new();
    let report = LanguagesReport {
        root: "/work".to_string(),
        breakdown: &breakdown,
        registry: &registry,
        aliases: &aliases,
    };

    let text = OutputFormat::Text
        .render(&LanguagesTextFormatter, &report)
        .unwrap();
    assert!(text.starts_with(&"=".repeat(100)));

    let json = OutputFormat::Json
        .render(&LanguagesTextFormatter, &report)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["overall"]["code"], 3);
}
