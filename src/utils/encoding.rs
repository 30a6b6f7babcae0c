//! Encoding detection and decoding of raw file bytes.
//!
//! Handles:
//! - BOM detection (UTF-8, UTF-16 LE/BE)
//! - UTF-8 fast path with strict validation
//! - Fallback encoding detection using chardetng (EUC-KR, Shift_JIS, windows-1252, ...)
//! - Binary content detection
//! - Replacement characters for undecodable sequences

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

const DEFAULT_SAMPLE_SIZE: usize = 8192;

const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];
const UTF16_LE_BOM: &[u8] = &[0xff, 0xfe];
const UTF16_BE_BOM: &[u8] = &[0xfe, 0xff];

/// Detect the encoding of `bytes`, returning a normalized label
/// ("utf-8", "utf-8-sig", "utf-16le", "euc-kr", ...).
///
/// Strategy:
/// 1. Check for BOM markers first (most reliable)
/// 2. Try strict UTF-8 decoding of a leading sample
/// 3. Fall back to chardetng
pub fn detect_encoding(bytes: &[u8]) -> String {
    if bytes.starts_with(UTF8_BOM) {
        return "utf-8-sig".to_string();
    }
    if bytes.starts_with(UTF16_LE_BOM) {
        return "utf-16le".to_string();
    }
    if bytes.starts_with(UTF16_BE_BOM) {
        return "utf-16be".to_string();
    }

    let sample = &bytes[..bytes.len().min(DEFAULT_SAMPLE_SIZE)];
    if is_utf8_prefix(sample) {
        return "utf-8".to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == bytes.len());
    let encoding = detector.guess(None, true);

    let name = encoding.name().to_lowercase();
    if name == "ascii" {
        "utf-8".to_string()
    } else {
        name
    }
}

/// A sample cut at an arbitrary byte offset may end mid-character; that
/// still counts as UTF-8.
fn is_utf8_prefix(sample: &[u8]) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none() && sample.len() == DEFAULT_SAMPLE_SIZE,
    }
}

/// Detect if content is binary rather than text.
///
/// A null byte is the only signal used: legacy-encoded text (EUC-KR and
/// friends) is mostly non-ASCII and would fail a printable-ratio test.
/// UTF-16 content legitimately contains nulls and is recognised by its BOM.
pub fn is_binary_content(bytes: &[u8]) -> bool {
    if bytes.starts_with(UTF16_LE_BOM) || bytes.starts_with(UTF16_BE_BOM) {
        return false;
    }
    bytes[..bytes.len().min(DEFAULT_SAMPLE_SIZE)].contains(&0)
}

/// Decode `bytes` to a `String`.
///
/// Strategy:
/// 1. If an encoding label is given and known, use it with replacement
/// 2. Try strict UTF-8 (BOM stripped)
/// 3. Otherwise detect the encoding and decode with replacement
///
/// # Returns
/// A tuple `(content, encoding_used)`
pub fn decode_bytes(bytes: &[u8], encoding: Option<&str>) -> (String, String) {
    if let Some(label) = encoding {
        if let Some(decoded) = decode_with_label(bytes, label) {
            return decoded;
        }
        tracing::warn!("Unknown encoding '{}', falling back to detection", label);
    }

    let without_bom = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(without_bom) {
        let label = if without_bom.len() == bytes.len() { "utf-8" } else { "utf-8-sig" };
        return (text.to_string(), label.to_string());
    }

    let detected = detect_encoding(bytes);
    if let Some(decoded) = decode_with_label(bytes, &detected) {
        return decoded;
    }

    // Last resort: UTF-8 with replacement
    let (cow, _, _) = UTF_8.decode(bytes);
    (cow.into_owned(), "utf-8".to_string())
}

fn decode_with_label(bytes: &[u8], label: &str) -> Option<(String, String)> {
    let encoding = match label.to_ascii_lowercase().as_str() {
        "utf-8-sig" => UTF_8,
        "utf-16le" | "utf-16-le" => UTF_16LE,
        "utf-16be" | "utf-16-be" => UTF_16BE,
        other => Encoding::for_label(other.as_bytes())?,
    };

    // decode() sniffs and strips a BOM, which may override the requested encoding
    let (decoded, used, _had_errors) = encoding.decode(bytes);
    Some((decoded.into_owned(), used.name().to_lowercase()))
}
