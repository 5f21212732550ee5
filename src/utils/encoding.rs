//! Text file reading with encoding detection.
//!
//! Strategy:
//! 1. BOM markers (UTF-8, UTF-16 LE/BE) pick the decoder and are stripped
//! 2. Strict UTF-8 fast path for everything else
//! 3. `chardetng` guess for non-UTF-8 bytes, decoded with replacement

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

/// Read a whole text file, returning its decoded content.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let (content, encoding) = decode_bytes(&bytes);
    tracing::debug!("Decoded {} as {}", path.display(), encoding.name());
    Ok(content)
}

/// Decode raw bytes, returning the text and the encoding used.
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static Encoding) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (cow, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            tracing::warn!("Replaced invalid {} sequences while decoding", encoding.name());
        }
        return (cow.into_owned(), encoding);
    }

    if let Ok(content) = std::str::from_utf8(bytes) {
        return (content.to_string(), UTF_8);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (cow, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        tracing::warn!("Replaced invalid {} sequences while decoding", encoding.name());
    }
    (cow.into_owned(), encoding)
}
