//! Punctuation-driven paragraph segmentation
//!
//! The segmenter scans normalized text once, left to right, and greedily
//! grows a paragraph until it sits on a sentence terminator that satisfies
//! the length policy:
//!
//! - nothing is flushed while the paragraph is shorter than `min_len`;
//! - at or past `max_len`, the next terminator ends the paragraph;
//! - a terminator directly followed by `'\n'` ends it early (only reachable
//!   with [`WhitespaceMode::KeepLineBreaks`]).
//!
//! A terminator in the final position never flushes mid-scan; the remainder
//! is always emitted as a trailing paragraph, so no content is dropped.
//!
//! Lengths are counted in chars on the untrimmed accumulator.
//!
//! # Example
//!
//! ```rust
//! use duanluo_core::{Config, Segmenter};
//!
//! let config = Config::builder().max_len(8).min_len(5).build().unwrap();
//! let segmenter = Segmenter::with_config(config);
//!
//! let result = segmenter.segment("第一句比较长的话。第二句也比较长的话。结尾");
//! assert_eq!(result.stats.paragraph_count, 3);
//! assert_eq!(
//!     result.joined(),
//!     "第一句比较长的话。\n\n第二句也比较长的话。\n\n结尾"
//! );
//! ```

mod output;
mod terminator;
mod whitespace;

pub use output::{FlushReason, Paragraph, SegmentStats, Segmentation, PARAGRAPH_SEPARATOR};
pub use terminator::{TermTable, SENTENCE_TERMINATORS};
pub use whitespace::{is_whitespace, normalize};

use crate::config::{Config, WhitespaceMode};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Paragraph segmenter
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: Config,
    terminators: TermTable,
}

impl Segmenter {
    /// Create a segmenter with default bounds
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a segmenter with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            terminators: TermTable::default(),
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Segment `text` into paragraphs
    pub fn segment(&self, text: &str) -> Segmentation {
        let normalized = normalize(text, self.config.whitespace);
        let chars: Vec<char> = normalized.chars().collect();

        let mut paragraphs = Vec::new();
        let mut acc = String::new();
        let mut acc_len = 0usize;
        let mut acc_start = 0usize;

        for (i, &ch) in chars.iter().enumerate() {
            if acc_len == 0 {
                acc_start = i;
            }
            acc.push(ch);
            acc_len += 1;

            let Some(&next) = chars.get(i + 1) else {
                continue;
            };
            if !self.terminators.is_terminator(ch) || acc_len < self.config.min_len {
                continue;
            }

            let reason = if acc_len >= self.config.max_len {
                Some(FlushReason::MaxLength)
            } else if next == '\n' {
                Some(FlushReason::LineBreak)
            } else {
                None
            };

            if let Some(reason) = reason {
                push_trimmed(&mut paragraphs, &acc, acc_start, reason);
                acc.clear();
                acc_len = 0;
            }
        }

        push_trimmed(&mut paragraphs, &acc, acc_start, FlushReason::Trailing);

        Segmentation::new(paragraphs, chars.len())
    }

    /// Segment `text` and join the paragraphs with a blank line
    pub fn segment_text(&self, text: &str) -> String {
        self.segment(text).joined()
    }

    /// Segment several independent texts, preserving input order
    #[cfg(feature = "parallel")]
    pub fn segment_many(&self, texts: &[&str]) -> Vec<Segmentation> {
        texts.par_iter().map(|text| self.segment(text)).collect()
    }

    /// Segment several independent texts, preserving input order
    #[cfg(not(feature = "parallel"))]
    pub fn segment_many(&self, texts: &[&str]) -> Vec<Segmentation> {
        texts.iter().map(|text| self.segment(text)).collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Segment `text` with explicit bounds and return the joined paragraphs.
///
/// Bounds are taken as given: zero or inverted bounds are not rejected here.
pub fn segment(text: &str, max_len: usize, min_len: usize) -> String {
    let config = Config {
        max_len,
        min_len,
        whitespace: WhitespaceMode::Collapse,
    };
    Segmenter::with_config(config).segment_text(text)
}

fn push_trimmed(paragraphs: &mut Vec<Paragraph>, acc: &str, acc_start: usize, flush: FlushReason) {
    let trimmed = acc.trim_matches(is_whitespace);
    if trimmed.is_empty() {
        return;
    }

    let leading = acc.chars().take_while(|&c| is_whitespace(c)).count();
    paragraphs.push(Paragraph {
        text: trimmed.to_string(),
        char_offset: acc_start + leading,
        char_len: trimmed.chars().count(),
        flush,
    });
}
