//! Text decoding for files and incremental reads

use anyhow::Result;
use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};

use crate::error::CliError;

/// Look up an encoding by WHATWG label; UTF-8 when none is given
pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding> {
    match label {
        None => Ok(UTF_8),
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| CliError::ConfigError(format!("unknown encoding '{label}'")).into()),
    }
}

/// Decode a complete byte buffer, honoring a byte order mark
pub fn decode_all(bytes: &[u8], encoding: &'static Encoding) -> (String, bool) {
    let (text, actual, had_errors) = encoding.decode(bytes);
    if actual != encoding {
        log::debug!("Byte order mark selected {}", actual.name());
    }
    (text.into_owned(), had_errors)
}

/// Decoder that carries incomplete byte sequences across reads
pub struct ChunkDecoder {
    decoder: Decoder,
    replaced: bool,
}

impl ChunkDecoder {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            decoder: encoding.new_decoder(),
            replaced: false,
        }
    }

    /// Decode the next read; `last` flushes any held-back bytes
    pub fn decode(&mut self, bytes: &[u8], last: bool) -> String {
        let mut out = String::new();
        let mut input = bytes;

        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(input.len())
                .unwrap_or(input.len());
            out.reserve(needed);

            let (result, read, replaced) = self.decoder.decode_to_string(input, &mut out, last);
            self.replaced |= replaced;
            input = &input[read..];

            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => continue,
            }
        }

        out
    }

    /// Whether malformed input was replaced with U+FFFD so far
    pub fn had_replacements(&self) -> bool {
        self.replaced
    }
}
