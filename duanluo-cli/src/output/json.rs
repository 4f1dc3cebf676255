//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use duanluo_core::Paragraph;
use std::io::Write;

/// JSON formatter - outputs paragraphs as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    paragraphs: Vec<Paragraph>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            paragraphs: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        self.paragraphs.push(paragraph.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.paragraphs)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duanluo_core::FlushReason;

    #[test]
    fn test_json_fields() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .format_paragraph(&Paragraph {
                text: "话说天下大势。".to_string(),
                char_offset: 0,
                char_len: 7,
                flush: FlushReason::MaxLength,
            })
            .unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(value[0]["text"], "话说天下大势。");
        assert_eq!(value[0]["char_len"], 7);
        assert_eq!(value[0]["flush"], "max_length");
    }
}
