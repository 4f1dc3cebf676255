//! Input abstraction and text decoding

use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, GBK, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::{Error, Result};

/// How input bytes are turned into text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Strict UTF-8 (a leading BOM is dropped)
    #[default]
    Utf8Only,
    /// UTF-8, then BOM-marked UTF-16, then GBK
    Auto,
}

/// Text decoded from raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Decoded text
    pub text: String,
    /// Encoding that succeeded
    pub encoding: &'static Encoding,
}

/// Decode `bytes` according to `policy`.
///
/// Malformed sequences are never replaced: a candidate encoding either
/// decodes cleanly or is skipped.
pub fn decode(bytes: &[u8], policy: DecodePolicy) -> Result<Decoded> {
    if let Some(text) = decode_utf8(bytes) {
        return Ok(Decoded {
            text,
            encoding: UTF_8,
        });
    }

    if policy == DecodePolicy::Utf8Only {
        return Err(Error::Decode("input is not valid UTF-8".into()));
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        if encoding == UTF_16LE || encoding == UTF_16BE {
            if let Some(text) = decode_strict(encoding, &bytes[bom_len..]) {
                return Ok(Decoded { text, encoding });
            }
        }
    }

    if let Some(text) = decode_strict(GBK, bytes) {
        return Ok(Decoded {
            text,
            encoding: GBK,
        });
    }

    Err(Error::Decode(
        "input is not valid UTF-8, UTF-16 or GBK".into(),
    ))
}

fn decode_utf8(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    std::str::from_utf8(bytes).ok().map(str::to_owned)
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// Source of undecoded novel text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A file, read in full
    File(PathBuf),
    /// Bytes already in memory
    Bytes(Vec<u8>),
}

impl Input {
    /// Input read from `path`
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Input held in memory
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Path of a file input
    pub fn path(&self) -> Option<&Path> {
        match self {
            Input::File(path) => Some(path.as_path()),
            Input::Bytes(_) => None,
        }
    }

    /// Read the input if needed and decode it according to `policy`.
    ///
    /// A failed read is [`Error::Infrastructure`]; undecodable bytes are
    /// [`Error::Decode`].
    pub fn into_text(self, policy: DecodePolicy) -> Result<Decoded> {
        match self {
            Input::Bytes(bytes) => decode(&bytes, policy),
            Input::File(path) => {
                let bytes = std::fs::read(&path).map_err(|e| {
                    Error::Infrastructure(format!("cannot read {}: {e}", path.display()))
                })?;
                decode(&bytes, policy)
            }
        }
    }
}
