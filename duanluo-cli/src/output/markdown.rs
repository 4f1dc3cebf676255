//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use duanluo_core::Paragraph;
use std::io::Write;

/// Markdown formatter - outputs paragraphs as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    paragraph_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            paragraph_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        self.paragraph_count += 1;
        writeln!(self.writer, "{}. {}", self.paragraph_count, paragraph.text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total paragraphs: {}*", self.paragraph_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
