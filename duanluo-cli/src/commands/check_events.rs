//! Check-events command implementation

use clap::Args;
use duanluo_core::events::{self, EventListReport};
use std::path::Path;

use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader};

/// Arguments for the check-events command
#[derive(Debug, Args)]
pub struct CheckEventsArgs {
    /// Event-list JSON files or patterns (supports glob)
    #[arg(value_name = "FILE/PATTERN", required = true)]
    pub patterns: Vec<String>,
}

impl CheckEventsArgs {
    /// Execute the check-events command
    pub fn execute(&self) -> CliResult<()> {
        let files = resolve_patterns(&self.patterns)?;

        let mut invalid = 0;
        for path in &files {
            if !check_file(path) {
                invalid += 1;
            }
        }

        println!();
        if invalid == 0 {
            println!("✓ All {} file(s) are valid", files.len());
            Ok(())
        } else {
            println!("✗ {invalid} of {} file(s) are invalid", files.len());
            Err(CliError::ProcessingError(format!("{invalid} event list(s) failed the check")).into())
        }
    }
}

/// Check one file and print its report; returns whether it is valid
fn check_file(path: &Path) -> bool {
    let report = FileReader::read_text(path)
        .and_then(|json| events::check_str(&json).map_err(anyhow::Error::from));

    match report {
        Ok(report) => {
            print_report(path, &report);
            report.is_valid()
        }
        Err(e) => {
            log::error!("Failed to check {}: {e:#}", path.display());
            println!("✗ {}", path.display());
            println!("  Error: {e:#}");
            false
        }
    }
}

fn print_report(path: &Path, report: &EventListReport) {
    let marker = if report.is_valid() { "✓" } else { "✗" };
    println!("{marker} {}", path.display());

    for error in &report.errors {
        println!("  ✗ {error}");
    }
    for warning in &report.warnings {
        println!("  ⚠ {warning}");
    }

    let counts = [
        (events::DETAILED, report.detailed_events),
        (events::SIMPLIFIED, report.simplified_events),
        (events::MINIMAL, report.minimal_events),
    ];
    let counts: Vec<String> = counts
        .iter()
        .filter_map(|(field, count)| count.map(|n| format!("{field} {n}")))
        .collect();
    if !counts.is_empty() {
        println!("  {}", counts.join(", "));
    }
}
