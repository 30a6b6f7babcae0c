//! Stable content checksums

use sha2::{Digest, Sha256};

/// First 16 hex chars of the SHA-256 of `bytes`.
pub fn content_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    format!("{:x}", result)[..16].to_string()
}
