//! # Exported Files
//!
//! A downloaded export: the bytes from the API plus the name it is saved under.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// A file ready to be written to disk, byte-for-byte as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write into `dir` (created if missing) and return the full path.
    ///
    /// The name is passed through [`safe_filename`], so the file always lands
    /// directly inside `dir`.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(safe_filename(&self.filename));
        fs::write(&path, &self.bytes)?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "Saved export");
        Ok(path)
    }
}

/// Make a server-supplied name usable as a single file name: path
/// separators become `_` and leading dots are dropped.
pub fn safe_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();

    let trimmed = replaced.trim_start_matches('.');
    if trimmed.is_empty() {
        "download".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_to_writes_bytes_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let bytes: Vec<u8> = vec![0, 159, 146, 150, b'\n', 0xff];
        let file = ExportedFile::new("deals-report-2024-01-01.csv", bytes.clone());

        let path = file.save_to(&dir.path().join("downloads")).unwrap();

        assert_eq!(path.file_name().unwrap(), "deals-report-2024-01-01.csv");
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn test_safe_filename() {
        assert_eq!(safe_filename("EUR/USD_Weekly_2024-01-05.csv"), "EUR_USD_Weekly_2024-01-05.csv");
        assert_eq!(safe_filename("../escaped_2024-01-05.csv"), "_escaped_2024-01-05.csv");
        assert_eq!(safe_filename("a\\b.csv"), "a_b.csv");
        assert_eq!(safe_filename(".."), "download");
        assert_eq!(safe_filename("plain.csv"), "plain.csv");
    }

    #[test]
    fn test_save_to_stays_inside_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("dl");

        let slash = ExportedFile::new("EUR/USD_Weekly_2024-01-05.csv", b"a".to_vec());
        let path = slash.save_to(&dir).unwrap();
        assert_eq!(path, dir.join("EUR_USD_Weekly_2024-01-05.csv"));

        let escape = ExportedFile::new("../escaped_2024-01-05.csv", b"b".to_vec());
        let path = escape.save_to(&dir).unwrap();
        assert_eq!(path.parent(), Some(dir.as_path()));
        assert!(!root.path().join("escaped_2024-01-05.csv").exists());
        assert_eq!(fs::read(path).unwrap(), b"b");
    }
}
