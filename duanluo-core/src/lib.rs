//! Paragraph segmentation and chapter splitting for Chinese novel text
//!
//! The centrepiece is a punctuation-driven [`Segmenter`]: it collapses
//! whitespace, then greedily grows paragraphs and only breaks them at
//! sentence terminators that satisfy a minimum and a maximum length.
//! Around it sit a regex-driven [`ChapterSplitter`], a checker for
//! per-chapter event-list JSON documents, and input decoding for the legacy
//! encodings Chinese text files often come in.
//!
//! # Example
//!
//! ```rust
//! use duanluo_core::segment;
//!
//! let text = "这是第一句话。这是第二句话！这是第三句话？";
//! assert_eq!(segment(text, 100, 5), text);
//! assert_eq!(segment("", 100, 20), "");
//! ```

pub mod chapter;
pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod segmenter;

pub use chapter::{Chapter, ChapterPattern, ChapterSplitter, NamingStyle, SplitMode, SplitResult};
pub use config::{Config, ConfigBuilder, WhitespaceMode};
pub use error::{Error, Result};
pub use events::{EventListReport, Issue};
pub use input::{decode, DecodePolicy, Decoded, Input};
pub use segmenter::{
    segment, FlushReason, Paragraph, SegmentStats, Segmentation, Segmenter, PARAGRAPH_SEPARATOR,
};
