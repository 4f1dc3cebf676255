//! Generate config command implementation

use anyhow::{bail, Context};
use clap::Args;
use std::path::PathBuf;

use crate::error::CliResult;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "duanluo.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!("   duanluo -c {} segment input.txt", self.output.display());

        Ok(())
    }
}

/// Template configuration content
fn generate_template() -> String {
    format!(
        r#"# duanluo configuration
# Command-line flags take precedence over values in this file.

[segment]
# A sentence terminator ends the paragraph once it reaches this many chars
max_len = {max_len}

# Paragraphs never break before this many chars
min_len = {min_len}

# Keep source line breaks so a terminator right before one ends a paragraph
keep_line_breaks = false

# Appended to the input file stem for default output names
suffix = "{suffix}"

[split]
# Chapter heading regex; the built-in pattern for the mode is used when unset
# pattern = "第[一二三四五六七八九十百千零〇○两\\d]+回"

# "inline" matches headings anywhere, "line" matches whole lines
mode = "inline"

# "number" writes 001.txt, "number-title" writes 001_<heading>.txt
naming = "number"

# "auto" tries UTF-8, UTF-16 and GBK; "utf8" is strict
encoding = "auto"

[batch]
# Worker threads, 0 uses every CPU
threads = 0
"#,
        max_len = duanluo_core::config::defaults::MAX_LEN,
        min_len = duanluo_core::config::defaults::MIN_LEN,
        suffix = crate::config::DEFAULT_SUFFIX,
    )
}
