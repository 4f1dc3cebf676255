//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use duanluo_core::{Paragraph, PARAGRAPH_SEPARATOR};
use std::io::Write;

/// Plain text formatter - paragraphs separated by a blank line, no trailing newline
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        if self.written > 0 {
            self.writer.write_all(PARAGRAPH_SEPARATOR.as_bytes())?;
        }
        self.writer.write_all(paragraph.text.as_bytes())?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duanluo_core::Segmenter;

    #[test]
    fn test_matches_joined_output() {
        let text = "一二三四五六七八九十。一二三四五六七八九十。一二三四五六七八九十。一二三";
        let config = duanluo_core::Config::builder()
            .max_len(15)
            .min_len(5)
            .build()
            .unwrap();
        let result = Segmenter::with_config(config).segment(text);

        let mut formatter = TextFormatter::new(Vec::new());
        for paragraph in &result.paragraphs {
            formatter.format_paragraph(paragraph).unwrap();
        }
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(formatter.writer).unwrap(), result.joined());
    }

    #[test]
    fn test_empty_output() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert!(formatter.writer.is_empty());
    }
}
