//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use crate::progress::ReadProgress;
use anyhow::Result;
use std::io;

/// Read items from the given file patterns, or from stdin when there are none
///
/// Items from several files are concatenated in sorted path order.
pub fn read_items(patterns: &[String], quiet: bool) -> Result<Vec<String>> {
    if patterns.is_empty() {
        log::debug!("Reading items from standard input");
        return FileReader::read_items_from(io::stdin().lock());
    }

    let files = resolve_patterns(patterns)?;
    log::info!("Resolved {} input file(s)", files.len());

    let mut progress = ReadProgress::new(files.len(), quiet);
    let mut items = Vec::new();
    for path in &files {
        let file_items = FileReader::read_items(path)?;
        progress.file_read(path, file_items.len());
        items.extend(file_items);
    }

    let total = progress.finish();
    log::debug!("Read {} item(s) from {} file(s)", total, files.len());

    Ok(items)
}
