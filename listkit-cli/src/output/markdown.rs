//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs items as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    item_count: usize,
    chunk_count: Option<usize>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            item_count: 0,
            chunk_count: None,
        }
    }

    fn write_list(&mut self, items: &[String]) -> Result<()> {
        for (i, item) in items.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, item)?;
        }
        self.item_count += items.len();
        Ok(())
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn write_items(&mut self, items: &[String]) -> Result<()> {
        self.write_list(items)
    }

    fn write_chunks(&mut self, chunks: &[Vec<String>]) -> Result<()> {
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## Chunk {}", i + 1)?;
            writeln!(self.writer)?;
            self.write_list(chunk)?;
        }
        self.chunk_count = Some(chunks.len());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        match self.chunk_count {
            Some(chunks) => writeln!(
                self.writer,
                "*Total items: {} in {} chunks*",
                self.item_count, chunks
            )?,
            None => writeln!(self.writer, "*Total items: {}*", self.item_count)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}
