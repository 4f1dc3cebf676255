//! Segment command implementation

use anyhow::{Context as _, Result};
use clap::Args;
use duanluo_core::{Config, SegmentStats, Segmenter, WhitespaceMode};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use super::Context;
use crate::config::SegmentConfig;
use crate::error::{CliError, CliResult};
use crate::input::FileReader;
use crate::output::{create_formatter, segmented_path, OutputFormat};

/// Paragraph bounds shared by the segment and batch commands
#[derive(Debug, Clone, Default, Args)]
pub struct SegmentOptions {
    /// Paragraph length (chars) at which a sentence terminator forces a break
    #[arg(short = 'm', long, value_name = "CHARS")]
    pub max_len: Option<usize>,

    /// Paragraph length (chars) below which no break happens
    #[arg(short = 'n', long, value_name = "CHARS")]
    pub min_len: Option<usize>,

    /// Keep source line breaks so a terminator before one can end a paragraph
    #[arg(long)]
    pub keep_line_breaks: bool,
}

impl SegmentOptions {
    /// Merge flags over the config file and build a segmenter
    pub fn segmenter(&self, defaults: &SegmentConfig) -> Result<Segmenter> {
        let whitespace = if self.keep_line_breaks || defaults.keep_line_breaks {
            WhitespaceMode::KeepLineBreaks
        } else {
            WhitespaceMode::Collapse
        };

        let config = Config::builder()
            .max_len(self.max_len.unwrap_or(defaults.max_len))
            .min_len(self.min_len.unwrap_or(defaults.min_len))
            .whitespace(whitespace)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        if config.is_degenerate() {
            log::warn!(
                "min_len ({}) >= max_len ({}): every sentence reaching min_len becomes a paragraph",
                config.min_len(),
                config.max_len()
            );
        }

        Ok(Segmenter::with_config(config))
    }
}

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input text file (UTF-8)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: <stem>_分段<ext> next to the input, .json/.md for those formats)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub options: SegmentOptions,
}

impl SegmentArgs {
    /// Execute the segment command.
    ///
    /// A missing or unreadable input is reported and logged but is not a
    /// process failure.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let segmenter = self.options.segmenter(&ctx.config.segment)?;

        if !self.input.is_file() {
            let error = CliError::FileNotFound(self.input.display().to_string());
            log::error!("{error}");
            eprintln!("Error: {error}");
            return Ok(());
        }

        let destination = if self.stdout {
            None
        } else {
            Some(
                self.output
                    .clone()
                    .unwrap_or_else(|| {
                        segmented_path(&self.input, &ctx.config.segment.suffix, self.format)
                    }),
            )
        };

        match segment_file(&self.input, destination.as_deref(), &segmenter, self.format) {
            Ok(stats) => {
                log::info!(
                    "{} paragraphs, {:.1} chars on average",
                    stats.paragraph_count,
                    stats.avg_paragraph_len
                );
                if let Some(path) = destination {
                    println!("Segmentation complete: {}", path.display());
                }
            }
            Err(e) => {
                log::error!("Failed to segment {}: {e:#}", self.input.display());
                eprintln!("Error processing file: {e:#}");
            }
        }

        Ok(())
    }
}

/// Segment one file and write it to `output` (stdout when `None`)
pub fn segment_file(
    input: &Path,
    output: Option<&Path>,
    segmenter: &Segmenter,
    format: OutputFormat,
) -> Result<SegmentStats> {
    let size = FileReader::file_size(input)?;
    log::debug!("Reading {} ({size} bytes)", input.display());
    let text = FileReader::read_text(input)?;
    let result = segmenter.segment(&text);

    let mut formatter = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            create_formatter(format, BufWriter::new(file))
        }
        None => create_formatter(format, io::stdout()),
    };

    for paragraph in &result.paragraphs {
        formatter.format_paragraph(paragraph)?;
    }
    formatter.finish()?;

    Ok(result.stats)
}
