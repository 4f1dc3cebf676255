//! File reading utilities

use anyhow::{Context, Result};
use duanluo_core::{DecodePolicy, Decoded, Error, Input};
use std::fs;
use std::path::Path;

/// File reader with encoding validation
pub struct FileReader;

impl FileReader {
    /// Read a file as strict UTF-8 text (a leading BOM is dropped)
    pub fn read_text(path: &Path) -> Result<String> {
        Ok(Self::read_decoded(path, DecodePolicy::Utf8Only)?.text)
    }

    /// Read a file and decode it according to `policy`
    pub fn read_decoded(path: &Path, policy: DecodePolicy) -> Result<Decoded> {
        Input::from_file(path).into_text(policy).map_err(|e| {
            let context = match e {
                Error::Decode(_) => "Failed to decode",
                _ => "Failed to read file",
            };
            anyhow::Error::new(e).context(format!("{context}: {}", path.display()))
        })
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
