//! duanluo command-line entry point

use clap::Parser;
use std::path::PathBuf;

use duanluo_cli::commands::{Commands, Context};
use duanluo_cli::config::CliConfig;
use duanluo_cli::CliResult;

/// Paragraph segmentation and chapter splitting for Chinese novels
#[derive(Debug, Parser)]
#[command(name = "duanluo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.init_logging();

    log::debug!("Arguments: {:?}", cli);

    let ctx = Context {
        config: CliConfig::load(cli.config.as_deref())?,
        quiet: cli.quiet,
    };

    cli.command.execute(&ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["duanluo", "segment", "a.txt", "-vv", "-m", "80"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Segment(args) => assert_eq!(args.options.max_len, Some(80)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_output_conflicts_with_stdout() {
        let result = Cli::try_parse_from(["duanluo", "segment", "a.txt", "-o", "b.txt", "--stdout"]);
        assert!(result.is_err());
    }
}
