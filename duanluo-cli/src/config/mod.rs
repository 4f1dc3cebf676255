//! Configuration module

use std::fs;
use std::path::Path;

use anyhow::Result;
use duanluo_core::config::defaults;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Suffix appended to the input stem for segmented output
pub const DEFAULT_SUFFIX: &str = "_分段";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segment: SegmentConfig,

    /// Chapter splitting configuration
    #[serde(default)]
    pub split: SplitConfig,

    /// Batch configuration
    #[serde(default)]
    pub batch: BatchConfig,
}

impl CliConfig {
    /// Load from a TOML file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("cannot parse {}: {e}", path.display()))
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentConfig {
    /// Paragraph length (chars) at which a terminator forces a break
    pub max_len: usize,

    /// Paragraph length (chars) below which no break happens
    pub min_len: usize,

    /// Keep source line breaks so they can end paragraphs
    pub keep_line_breaks: bool,

    /// Suffix for default output file names
    pub suffix: String,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            max_len: defaults::MAX_LEN,
            min_len: defaults::MIN_LEN,
            keep_line_breaks: false,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// Chapter splitting configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SplitConfig {
    /// Heading regex (default depends on mode)
    pub pattern: Option<String>,

    /// Heading location mode
    pub mode: SplitModeArg,

    /// Chapter file naming
    pub naming: NamingArg,

    /// Source encoding handling
    pub encoding: EncodingArg,
}

/// Batch-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

/// Chapter heading mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SplitModeArg {
    /// Headings matched anywhere in the text
    #[default]
    Inline,
    /// Headings are whole lines
    Line,
}

/// Chapter file naming
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NamingArg {
    /// 001.txt
    #[default]
    Number,
    /// 001_<title>.txt
    NumberTitle,
}

/// Source encoding handling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingArg {
    /// Try UTF-8, UTF-16 and GBK
    #[default]
    Auto,
    /// Strict UTF-8
    Utf8,
}

impl From<SplitModeArg> for duanluo_core::SplitMode {
    fn from(mode: SplitModeArg) -> Self {
        match mode {
            SplitModeArg::Inline => Self::Inline,
            SplitModeArg::Line => Self::Line,
        }
    }
}

impl From<NamingArg> for duanluo_core::NamingStyle {
    fn from(naming: NamingArg) -> Self {
        match naming {
            NamingArg::Number => Self::Number,
            NamingArg::NumberTitle => Self::NumberTitle,
        }
    }
}

impl From<EncodingArg> for duanluo_core::DecodePolicy {
    fn from(encoding: EncodingArg) -> Self {
        match encoding {
            EncodingArg::Auto => Self::Auto,
            EncodingArg::Utf8 => Self::Utf8Only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.segment.max_len, 100);
        assert_eq!(config.segment.min_len, 20);
        assert_eq!(config.segment.suffix, "_分段");
        assert_eq!(config.split.mode, SplitModeArg::Inline);
        assert_eq!(config.batch.threads, 0);
    }

    #[test]
    fn test_load_none_is_default() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[segment]
max_len = 150

[split]
mode = "line"
naming = "number-title"
"#
        )
        .unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.segment.max_len, 150);
        assert_eq!(config.segment.min_len, 20);
        assert_eq!(config.split.mode, SplitModeArg::Line);
        assert_eq!(config.split.naming, NamingArg::NumberTitle);
        assert_eq!(config.split.encoding, EncodingArg::Auto);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[segment]\nmax_len = \"long\"").unwrap();

        let err = CliConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/duanluo.toml"))).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
