//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use listkit_core::PatternSyntax;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Filter configuration
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Strip configuration
    #[serde(default)]
    pub strip: StripConfig,

    /// Chunk configuration
    #[serde(default)]
    pub chunk: ChunkConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.to_string().trim().to_string()).into())
    }
}

/// Filter-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Pattern syntax used when `--syntax` is not given
    pub default_syntax: PatternSyntax,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format used when `--format` is not given
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Strip-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct StripConfig {
    /// Characters stripped when `--chars` is not given (whitespace if unset)
    pub default_chars: Option<String>,
}

/// Chunk-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ChunkConfig {
    /// Chunk size used when `--size` is not given
    pub default_size: Option<usize>,
}
