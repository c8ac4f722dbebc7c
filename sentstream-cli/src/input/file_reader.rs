//! File reading utilities

use std::{fs, path::Path};

use anyhow::{Context, Result};
use encoding_rs::Encoding;

use super::decoder::decode_all;

/// File reader with encoding-aware decoding
pub struct FileReader;

impl FileReader {
    /// Read a file and decode it as `encoding`
    pub fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        log::debug!("Read {} ({} bytes)", path.display(), bytes.len());

        let (text, had_errors) = decode_all(&bytes, encoding);
        if had_errors {
            log::warn!(
                "{}: malformed {} input replaced with U+FFFD",
                path.display(),
                encoding.name()
            );
        }

        Ok(text)
    }
}
