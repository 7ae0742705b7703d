//! License-keyed payload obfuscation
//!
//! Values embedded in page markup (transaction names, custom attributes) are
//! XOR'd against a rotating key derived from the account license key, then
//! Base64-encoded. This is not encryption; it only keeps license-derived
//! material out of plain-text page source. XOR is self-inverse, so re-applying
//! the transform to the decoded bytes recovers the original.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::{Result, RumError};

/// Minimum license key length required for snippet emission to proceed.
/// Configurations below this floor suppress the footer instead of emitting a
/// weakly-keyed payload.
pub const MIN_LICENSE_BYTES: usize = 13;

/// Obfuscate `text` under `license_bytes` and return the Base64 encoding.
///
/// Byte `i` of the UTF-8 input is XOR'd with `license_bytes[i % len]`. The
/// key must be non-empty; an empty key is a caller contract violation, not a
/// degraded mode.
pub fn obfuscate(license_bytes: &[u8], text: &str) -> Result<String> {
    if license_bytes.is_empty() {
        return Err(RumError::EmptyObfuscationKey);
    }
    Ok(STANDARD.encode(xor_rotate(license_bytes, text.as_bytes())))
}

/// Reverse [`obfuscate`]: Base64-decode, XOR with the same rotating key, and
/// interpret the result as UTF-8. Used by collector-side tooling and tests.
pub fn deobfuscate(license_bytes: &[u8], encoded: &str) -> Result<String> {
    if license_bytes.is_empty() {
        return Err(RumError::EmptyObfuscationKey);
    }
    let decoded = STANDARD
        .decode(encoded)
        .map_err(|e| RumError::InvalidEncoding(e.to_string()))?;
    String::from_utf8(xor_rotate(license_bytes, &decoded))
        .map_err(|e| RumError::InvalidEncoding(e.to_string()))
}

fn xor_rotate(key: &[u8], data: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, byte)| byte ^ key[i % key.len()])
        .collect()
}
