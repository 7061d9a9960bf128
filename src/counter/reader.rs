use std::fs;
use std::io;
use std::path::Path;

use crate::error::{LineTallyError, Result};

use super::{LineClassifier, LineCountRecord};

const UTF8_BOM: char = '\u{feff}';

/// Source of file contents (for testability).
pub trait FileReader {
    /// Read file contents as bytes.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Real filesystem implementation of `FileReader`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Read a file as UTF-8 text, dropping a leading byte-order mark.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read and `InvalidEncoding` if it
/// is not valid UTF-8.
pub fn read_source(reader: &dyn FileReader, path: &Path) -> Result<String> {
    let bytes = reader.read(path).map_err(|source| LineTallyError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::from_utf8(bytes).map_err(|_| LineTallyError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;
    if text.starts_with(UTF8_BOM) {
        text.drain(..UTF8_BOM.len_utf8());
    }
    Ok(text)
}

impl LineClassifier<'_> {
    /// Read and classify one file.
    ///
    /// A read failure is reported as an error, never as an empty record: an
    /// empty file still has one (blank) line.
    ///
    /// # Errors
    /// Returns `FileRead` or `InvalidEncoding` when the file cannot be read as text.
    pub fn classify_file(
        &self,
        reader: &dyn FileReader,
        path: &Path,
        tag: &str,
    ) -> Result<LineCountRecord> {
        let content = read_source(reader, path)?;
        Ok(self.classify(&content, tag))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
