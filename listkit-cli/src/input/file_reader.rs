//! Reading items from files and streams

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads line-oriented input, one item per line
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file and split it into items
    pub fn read_items(path: &Path) -> Result<Vec<String>> {
        Ok(Self::split_items(&Self::read_text(path)?))
    }

    /// Read everything from a reader (typically stdin) and split it into items
    pub fn read_items_from<R: Read>(mut reader: R) -> Result<Vec<String>> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;

        Ok(Self::split_items(&content))
    }

    /// Split text into items, one per line
    ///
    /// A trailing newline does not produce an extra empty item; `\r\n` line
    /// endings are handled. Blank lines in the middle are kept as `""`.
    pub fn split_items(content: &str) -> Vec<String> {
        content.lines().map(str::to_string).collect()
    }
}
