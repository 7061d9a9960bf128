//! Shared test fixtures for counter tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::language::{CommentRule, LanguageRuleSet};

use super::FileReader;

/// `//` line comments and `/* */` blocks.
pub fn c_style() -> LanguageRuleSet {
    LanguageRuleSet::new(
        "cs",
        "C#",
        vec![
            CommentRule::single_line("//.*$").unwrap(),
            CommentRule::multi_line(r"/\*[\s\S]*?\*/").unwrap(),
        ],
    )
}

/// `#` line comments and triple-quoted blocks.
pub fn python() -> LanguageRuleSet {
    LanguageRuleSet::new(
        "py",
        "Python",
        vec![
            CommentRule::single_line("#.*$").unwrap(),
            CommentRule::multi_line(r#""""[\s\S]*?""""#).unwrap(),
            CommentRule::multi_line(r"'''[\s\S]*?'''").unwrap(),
        ],
    )
}

/// `<!-- -->` blocks only.
pub fn markup() -> LanguageRuleSet {
    LanguageRuleSet::new(
        "html",
        "HTML",
        vec![CommentRule::multi_line(r"<!--[\s\S]*?-->").unwrap()],
    )
}

/// In-memory reader; paths not in the map fail with `NotFound`.
#[derive(Default)]
pub struct MapReader {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MapReader {
    pub fn with(mut self, path: &str, content: &[u8]) -> Self {
        self.files.insert(PathBuf::from(path), content.to_vec());
        self
    }
}

impl FileReader for MapReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

/// Reads from disk but fails for files with the given name.
pub struct FailingReader {
    pub fail_name: &'static str,
}

impl FileReader for FailingReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if path.file_name().is_some_and(|n| n == self.fail_name) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
        }
        std::fs::read(path)
    }
}
