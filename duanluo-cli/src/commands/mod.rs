//! CLI command implementations

use clap::Subcommand;

use crate::config::CliConfig;
use crate::error::CliResult;

pub mod batch;
pub mod check_events;
pub mod generate_config;
pub mod segment;
pub mod split;

/// State shared by every command
#[derive(Debug, Default)]
pub struct Context {
    /// Loaded configuration file (or defaults)
    pub config: CliConfig,
    /// Suppress progress output
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split one text file into paragraphs
    Segment(segment::SegmentArgs),

    /// Segment every file matching the given patterns
    Batch(batch::BatchArgs),

    /// Split a novel into one file per chapter
    Split(split::SplitArgs),

    /// Check event-list JSON files
    CheckEvents(check_events::CheckEventsArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        match self {
            Commands::Segment(args) => args.execute(ctx),
            Commands::Batch(args) => args.execute(ctx),
            Commands::Split(args) => args.execute(ctx),
            Commands::CheckEvents(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
