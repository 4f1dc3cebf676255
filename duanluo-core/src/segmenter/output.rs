//! Output types for paragraph segmentation

use serde::Serialize;

/// Separator placed between paragraphs in joined output
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Why a paragraph was emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlushReason {
    /// Reached `max_len` at a sentence terminator
    MaxLength,
    /// Sentence terminator directly followed by a line break
    LineBreak,
    /// Remainder emitted after the scan finished
    Trailing,
}

/// A single emitted paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Trimmed paragraph text
    pub text: String,
    /// Char offset of the first char in the normalized text
    pub char_offset: usize,
    /// Length in chars
    pub char_len: usize,
    /// Flush trigger
    pub flush: FlushReason,
}

/// Segmentation statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SegmentStats {
    /// Chars in the normalized text
    pub chars_processed: usize,
    /// Number of paragraphs emitted
    pub paragraph_count: usize,
    /// Average paragraph length in chars
    pub avg_paragraph_len: f32,
}

/// Result of segmenting one text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segmentation {
    /// Paragraphs in input order
    pub paragraphs: Vec<Paragraph>,
    /// Processing statistics
    pub stats: SegmentStats,
}

impl Segmentation {
    pub(crate) fn new(paragraphs: Vec<Paragraph>, chars_processed: usize) -> Self {
        let paragraph_count = paragraphs.len();
        let avg_paragraph_len = if paragraph_count > 0 {
            paragraphs.iter().map(|p| p.char_len).sum::<usize>() as f32 / paragraph_count as f32
        } else {
            0.0
        };

        Self {
            paragraphs,
            stats: SegmentStats {
                chars_processed,
                paragraph_count,
                avg_paragraph_len,
            },
        }
    }

    /// Paragraph texts joined by a blank line
    pub fn joined(&self) -> String {
        self.texts().collect::<Vec<_>>().join(PARAGRAPH_SEPARATOR)
    }

    /// Iterate over paragraph texts
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.paragraphs.iter().map(|p| p.text.as_str())
    }

    /// True when the input produced no paragraphs
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
