//! Input file pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve input file patterns to existing files, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if is_literal(pattern) && !Path::new(pattern).is_file() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let before = files.len();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            log::warn!("Pattern matched no files: {}", pattern);
        }
    }

    if files.is_empty() {
        anyhow::bail!(
            "No files found matching the provided patterns: {}",
            patterns.join(", ")
        );
    }

    files.sort();
    files.dedup();

    Ok(files)
}

/// Whether the pattern has no glob metacharacters
fn is_literal(pattern: &str) -> bool {
    !pattern.contains(['*', '?', '['])
}
