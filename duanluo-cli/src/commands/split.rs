//! Split command implementation

use anyhow::{Context as _, Result};
use clap::Args;
use duanluo_core::{ChapterPattern, ChapterSplitter, DecodePolicy, NamingStyle, SplitMode};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use super::Context;
use crate::config::{EncodingArg, NamingArg, SplitModeArg};
use crate::error::{CliError, CliResult};
use crate::input::FileReader;
use crate::progress::ProgressReporter;

/// File name used for text before the first heading
pub const PREFACE_FILE: &str = "000_preface.txt";

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Novel text file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Directory for chapter files
    #[arg(short = 'd', long, value_name = "DIR", required = true)]
    pub output_dir: PathBuf,

    /// Chapter heading regex
    #[arg(short, long, value_name = "REGEX", conflicts_with = "pattern_file")]
    pub pattern: Option<String>,

    /// File holding the chapter heading regex
    #[arg(long, value_name = "FILE")]
    pub pattern_file: Option<PathBuf>,

    /// Where headings are matched
    #[arg(long, value_enum)]
    pub mode: Option<SplitModeArg>,

    /// Chapter file naming
    #[arg(long, value_enum)]
    pub naming: Option<NamingArg>,

    /// Source encoding handling
    #[arg(long, value_enum)]
    pub encoding: Option<EncodingArg>,

    /// Delete files already in the output directory (the input is kept)
    #[arg(long)]
    pub clean: bool,

    /// Write text before the first heading to 000_preface.txt
    #[arg(long)]
    pub keep_preface: bool,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let defaults = &ctx.config.split;
        let mode: SplitMode = self.mode.unwrap_or(defaults.mode).into();
        let naming: NamingStyle = self.naming.unwrap_or(defaults.naming).into();
        let policy: DecodePolicy = self.encoding.unwrap_or(defaults.encoding).into();

        let splitter = match self.pattern_source(defaults.pattern.as_deref())? {
            Some(source) => {
                let pattern = ChapterPattern::new(&source)
                    .map_err(|e| CliError::InvalidPattern(format!("{source}: {e}")))?;
                ChapterSplitter::new(pattern, mode)
            }
            None => ChapterSplitter::with_mode(mode),
        };
        log::debug!("Chapter pattern: {}", splitter.pattern().as_str());

        if !self.input.is_file() {
            return Err(CliError::FileNotFound(self.input.display().to_string()).into());
        }
        let decoded = FileReader::read_decoded(&self.input, policy)?;
        log::info!(
            "Read {} as {}",
            self.input.display(),
            decoded.encoding.name()
        );

        let result = splitter.split(&decoded.text);
        if result.used_fallback {
            println!(
                "Note: pattern matched nothing, used the built-in chapter pattern instead"
            );
        }
        if result.chapters.is_empty() {
            println!("No chapter headings found in {}", self.input.display());
            return Ok(());
        }

        self.prepare_output_dir()?;

        if self.keep_preface {
            if let Some(preface) = &result.preface {
                fs::write(self.output_dir.join(PREFACE_FILE), preface)
                    .with_context(|| format!("Failed to write {PREFACE_FILE}"))?;
            }
        }

        let mut progress = ProgressReporter::new(ctx.quiet);
        progress.init(result.chapters.len() as u64, "chapters");

        let mut written = HashSet::new();
        for chapter in &result.chapters {
            let name = chapter.file_name(naming);
            if !written.insert(name.clone()) {
                log::warn!(
                    "Chapter {} ({}) overwrites {name}",
                    chapter.index,
                    chapter.title.trim()
                );
            }

            let path = self.output_dir.join(&name);
            fs::write(&path, &chapter.content)
                .with_context(|| format!("Failed to write chapter file: {}", path.display()))?;

            progress.println(&format!("  {name}"));
            progress.item_completed(&name);
        }
        progress.finish();

        println!(
            "Split complete: {} chapters written to {}",
            result.chapters.len(),
            self.output_dir.display()
        );

        Ok(())
    }

    /// Pattern text from the flags, then the config file
    fn pattern_source(&self, configured: Option<&str>) -> Result<Option<String>> {
        if let Some(pattern) = &self.pattern {
            return Ok(Some(pattern.clone()));
        }
        if let Some(path) = &self.pattern_file {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;
            return Ok(Some(content.trim().to_string()));
        }
        Ok(configured.map(str::to_string))
    }

    fn prepare_output_dir(&self) -> Result<()> {
        let dir = &self.output_dir;
        if self.clean && dir.is_dir() {
            // The source novel and pattern file may live in the output directory
            let keep: Vec<PathBuf> = [Some(&self.input), self.pattern_file.as_ref()]
                .into_iter()
                .flatten()
                .filter_map(|path| fs::canonicalize(path).ok())
                .collect();

            for entry in fs::read_dir(dir)
                .with_context(|| format!("Failed to list {}", dir.display()))?
            {
                let path = entry?.path();
                if fs::canonicalize(&path).is_ok_and(|canonical| keep.contains(&canonical)) {
                    log::debug!("Keeping input file {}", path.display());
                    continue;
                }
                if path.is_file() {
                    fs::remove_file(&path)
                        .with_context(|| format!("Failed to remove {}", path.display()))?;
                }
            }
            log::info!("Cleaned {}", dir.display());
        }

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NOVEL: &str = "楔子\n第一回 风雪山神庙\n林冲。\n第二回 智取生辰纲\n杨志。\n";

    fn args(input: PathBuf, output_dir: PathBuf) -> SplitArgs {
        SplitArgs {
            input,
            output_dir,
            pattern: None,
            pattern_file: None,
            mode: None,
            naming: None,
            encoding: None,
            clean: false,
            keep_preface: false,
        }
    }

    fn context() -> Context {
        Context {
            quiet: true,
            ..Context::default()
        }
    }

    fn setup() -> (TempDir, SplitArgs) {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("novel.txt");
        fs::write(&input, NOVEL).unwrap();
        let out = temp_dir.path().join("chapters");
        let split = args(input, out);
        (temp_dir, split)
    }

    #[test]
    fn test_split_writes_numbered_files() {
        let (_temp_dir, split) = setup();
        split.execute(&context()).unwrap();

        let first = fs::read_to_string(split.output_dir.join("001.txt")).unwrap();
        assert_eq!(first, "第一回 风雪山神庙\n林冲。");
        assert!(split.output_dir.join("002.txt").exists());
        assert!(!split.output_dir.join(PREFACE_FILE).exists());
    }

    #[test]
    fn test_split_keep_preface_and_titles() {
        let (_temp_dir, mut split) = setup();
        split.keep_preface = true;
        split.mode = Some(SplitModeArg::Line);
        split.naming = Some(NamingArg::NumberTitle);
        split.execute(&context()).unwrap();

        assert_eq!(
            fs::read_to_string(split.output_dir.join(PREFACE_FILE)).unwrap(),
            "楔子"
        );
        assert!(split
            .output_dir
            .join("002_第二回 智取生辰纲.txt")
            .exists());
    }

    #[test]
    fn test_split_clean_removes_stale_files() {
        let (_temp_dir, mut split) = setup();
        fs::create_dir_all(&split.output_dir).unwrap();
        fs::write(split.output_dir.join("099.txt"), "旧").unwrap();

        split.clean = true;
        split.execute(&context()).unwrap();

        assert!(!split.output_dir.join("099.txt").exists());
        assert!(split.output_dir.join("001.txt").exists());
    }

    #[test]
    fn test_split_clean_keeps_source_in_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("novel.txt");
        let pattern_file = temp_dir.path().join("pattern.txt");
        fs::write(&input, NOVEL).unwrap();
        fs::write(&pattern_file, "第[一二]回").unwrap();
        fs::write(temp_dir.path().join("stale.txt"), "旧").unwrap();

        let mut split = args(input.clone(), temp_dir.path().to_path_buf());
        split.pattern_file = Some(pattern_file.clone());
        split.clean = true;
        split.execute(&context()).unwrap();

        assert_eq!(fs::read_to_string(&input).unwrap(), NOVEL);
        assert!(pattern_file.exists());
        assert!(!temp_dir.path().join("stale.txt").exists());
        assert!(temp_dir.path().join("001.txt").exists());
        assert!(temp_dir.path().join("002.txt").exists());
    }

    #[test]
    fn test_split_invalid_pattern_is_error() {
        let (_temp_dir, mut split) = setup();
        split.pattern = Some("第(".to_string());

        let err = split.execute(&context()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid pattern:"));
        assert!(!split.output_dir.exists());
    }

    #[test]
    fn test_split_pattern_file_is_trimmed() {
        let (temp_dir, mut split) = setup();
        let pattern_file = temp_dir.path().join("pattern.txt");
        fs::write(&pattern_file, "第[一二]回\n").unwrap();
        split.pattern_file = Some(pattern_file);

        assert_eq!(
            split.pattern_source(None).unwrap().as_deref(),
            Some("第[一二]回")
        );
        split.execute(&context()).unwrap();
        assert!(split.output_dir.join("002.txt").exists());
    }

    #[test]
    fn test_split_gbk_source() {
        let (temp_dir, split) = setup();
        let (bytes, _, _) = encoding_rs::GBK.encode(NOVEL);
        fs::write(temp_dir.path().join("novel.txt"), &bytes).unwrap();

        split.execute(&context()).unwrap();
        let first = fs::read_to_string(split.output_dir.join("001.txt")).unwrap();
        assert!(first.starts_with("第一回"));
    }
}
