//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Result of running a subcommand over the input items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformed {
    /// A flat sequence of items
    Items(Vec<String>),
    /// A sequence of chunks
    Chunks(Vec<Vec<String>>),
}

impl Transformed {
    /// Total number of items, across chunks if chunked
    pub fn item_count(&self) -> usize {
        match self {
            Transformed::Items(items) => items.len(),
            Transformed::Chunks(chunks) => chunks.iter().map(Vec::len).sum(),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One item per line, chunks separated by a blank line
    Text,
    /// JSON array of items, or array of arrays for chunks
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Lowercase name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write a flat sequence of items
    fn write_items(&mut self, items: &[String]) -> Result<()>;

    /// Write a sequence of chunks
    fn write_chunks(&mut self, chunks: &[Vec<String>]) -> Result<()>;

    /// Finalize output and flush the writer
    fn finish(&mut self) -> Result<()>;

    /// Write a transformation result, whichever shape it has
    fn write(&mut self, result: &Transformed) -> Result<()> {
        match result {
            Transformed::Items(items) => self.write_items(items),
            Transformed::Chunks(chunks) => self.write_chunks(chunks),
        }
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Build the formatter for `format` writing into `writer`
pub fn create_formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
