//! Configuration API for paragraph segmentation

use crate::error::Error;

/// Default configuration constants
pub mod defaults {
    /// Paragraph length (in chars) at which a sentence boundary forces a flush
    pub const MAX_LEN: usize = 100;

    /// Paragraph length (in chars) below which no flush happens
    pub const MIN_LEN: usize = 20;
}

/// How whitespace is normalized before scanning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WhitespaceMode {
    /// Every whitespace run, line breaks included, becomes one space
    #[default]
    Collapse,
    /// Runs containing a line break become a single `'\n'`, other runs a space
    KeepLineBreaks,
}

/// Segmentation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) max_len: usize,
    pub(crate) min_len: usize,
    pub(crate) whitespace: WhitespaceMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_len: defaults::MAX_LEN,
            min_len: defaults::MIN_LEN,
            whitespace: WhitespaceMode::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Maximum paragraph length in chars
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Minimum paragraph length in chars
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Whitespace normalization mode
    pub fn whitespace(&self) -> WhitespaceMode {
        self.whitespace
    }

    /// True when `min_len >= max_len`.
    ///
    /// Such bounds are accepted: every paragraph then ends at the first
    /// terminator where it reaches `min_len`.
    pub fn is_degenerate(&self) -> bool {
        self.min_len >= self.max_len
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.max_len == 0 {
            return Err(Error::Configuration(
                "max_len must be greater than 0".into(),
            ));
        }

        if self.min_len == 0 {
            return Err(Error::Configuration(
                "min_len must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_len: Option<usize>,
    min_len: Option<usize>,
    whitespace: Option<WhitespaceMode>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum paragraph length
    pub fn max_len(mut self, chars: usize) -> Self {
        self.max_len = Some(chars);
        self
    }

    /// Set the minimum paragraph length
    pub fn min_len(mut self, chars: usize) -> Self {
        self.min_len = Some(chars);
        self
    }

    /// Set the whitespace mode
    pub fn whitespace(mut self, mode: WhitespaceMode) -> Self {
        self.whitespace = Some(mode);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(max_len) = self.max_len {
            config.max_len = max_len;
        }

        if let Some(min_len) = self.min_len {
            config.min_len = min_len;
        }

        if let Some(mode) = self.whitespace {
            config.whitespace = mode;
        }

        config.validate()?;
        Ok(config)
    }
}
