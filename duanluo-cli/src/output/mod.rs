//! Output formatting module

use anyhow::Result;
use duanluo_core::Paragraph;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single paragraph
    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Paragraphs separated by a blank line
    #[default]
    Text,
    /// JSON array of paragraphs with offsets
    Json,
    /// Markdown numbered paragraph list
    Markdown,
}

impl OutputFormat {
    /// File extension for this format, `None` to keep the input's
    pub fn extension(self) -> Option<&'static str> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some("json"),
            OutputFormat::Markdown => Some("md"),
        }
    }
}

/// Create a formatter for `format` writing to `writer`
pub fn create_formatter<W>(format: OutputFormat, writer: W) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Default output path: `<stem><suffix><ext>` next to the input.
///
/// Text output keeps the input's extension; JSON and Markdown use their own.
pub fn segmented_path(input: &Path, suffix: &str, format: OutputFormat) -> PathBuf {
    input.with_file_name(segmented_file_name(input, suffix, format))
}

/// File name part of [`segmented_path`]
pub fn segmented_file_name(input: &Path, suffix: &str, format: OutputFormat) -> OsString {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(suffix);
    let ext = format
        .extension()
        .map(OsStr::new)
        .or_else(|| input.extension());
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }
    name
}

/// True when `path` already looks like segmented output
pub fn is_segmented(path: &Path, suffix: &str) -> bool {
    !suffix.is_empty()
        && path
            .file_stem()
            .map(|stem| stem.to_string_lossy().ends_with(suffix))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmented_path_keeps_extension() {
        let path = segmented_path(Path::new("books/白眉大侠/001.txt"), "_分段", OutputFormat::Text);
        assert_eq!(path, PathBuf::from("books/白眉大侠/001_分段.txt"));
    }

    #[test]
    fn test_segmented_path_without_extension() {
        let path = segmented_path(Path::new("novel"), "_分段", OutputFormat::Text);
        assert_eq!(path, PathBuf::from("novel_分段"));
    }

    #[test]
    fn test_segmented_path_uses_format_extension() {
        let input = Path::new("books/001.txt");
        assert_eq!(
            segmented_path(input, "_分段", OutputFormat::Json),
            PathBuf::from("books/001_分段.json")
        );
        assert_eq!(
            segmented_file_name(Path::new("novel"), "_分段", OutputFormat::Markdown),
            OsString::from("novel_分段.md")
        );
    }

    #[test]
    fn test_is_segmented() {
        assert!(is_segmented(Path::new("001_分段.txt"), "_分段"));
        assert!(!is_segmented(Path::new("001.txt"), "_分段"));
        assert!(!is_segmented(Path::new("001.txt"), ""));
    }
}
