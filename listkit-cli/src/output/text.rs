//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one item per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_items(&mut self, items: &[String]) -> Result<()> {
        for item in items {
            writeln!(self.writer, "{item}")?;
        }
        Ok(())
    }

    fn write_chunks(&mut self, chunks: &[Vec<String>]) -> Result<()> {
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                writeln!(self.writer)?;
            }
            self.write_items(chunk)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
