//! Batch command implementation

use anyhow::Context as _;
use clap::Args;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use super::segment::{segment_file, SegmentOptions};
use super::Context;
use crate::error::CliResult;
use crate::input::resolve_patterns;
use crate::output::{is_segmented, segmented_file_name, segmented_path, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the batch command
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Input files or patterns (supports glob)
    #[arg(value_name = "FILE/PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Directory for segmented files (default: next to each input)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format (json and markdown outputs use .json and .md)
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Number of worker threads (default: config, then CPU count)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Also process files that already carry the output suffix
    #[arg(long)]
    pub include_segmented: bool,

    #[command(flatten)]
    pub options: SegmentOptions,
}

/// Per-file outcome counts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let segmenter = self.options.segmenter(&ctx.config.segment)?;
        let suffix = ctx.config.segment.suffix.as_str();

        let files: Vec<PathBuf> = resolve_patterns(&self.patterns)?
            .into_iter()
            .filter(|path| {
                let skip = !self.include_segmented && is_segmented(path, suffix);
                if skip {
                    log::debug!("Skipping segmented file: {}", path.display());
                }
                !skip
            })
            .collect();

        if files.is_empty() {
            println!("No files to process");
            return Ok(());
        }

        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        }

        let threads = match self.threads.unwrap_or(ctx.config.batch.threads) {
            0 => num_cpus::get(),
            n => n,
        };
        log::info!("Segmenting {} files on {} threads", files.len(), threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        let mut progress = ProgressReporter::new(ctx.quiet);
        progress.init(files.len() as u64, "files");

        let outcomes: Vec<bool> = pool.install(|| {
            files
                .par_iter()
                .map(|input| {
                    let output = self.output_path(input, suffix);
                    let outcome =
                        segment_file(input, Some(&output), &segmenter, self.format);
                    progress.item_completed(&input.display().to_string());

                    match outcome {
                        Ok(stats) => {
                            log::info!(
                                "{} -> {} ({} paragraphs)",
                                input.display(),
                                output.display(),
                                stats.paragraph_count
                            );
                            true
                        }
                        Err(e) => {
                            log::error!("Failed to segment {}: {e:#}", input.display());
                            false
                        }
                    }
                })
                .collect()
        });
        progress.finish();

        let summary = BatchSummary {
            succeeded: outcomes.iter().filter(|ok| **ok).count(),
            failed: outcomes.iter().filter(|ok| !**ok).count(),
        };

        println!(
            "Batch complete: {} succeeded, {} failed, {} total",
            summary.succeeded,
            summary.failed,
            summary.total()
        );

        Ok(())
    }

    fn output_path(&self, input: &Path, suffix: &str) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(segmented_file_name(input, suffix, self.format)),
            None => segmented_path(input, suffix, self.format),
        }
    }
}
