//! Shared helpers

pub mod encoding;
pub mod hashing;
pub mod paths;

pub use encoding::{decode_bytes, detect_encoding, is_binary_content};
pub use hashing::content_checksum;
pub use paths::display_path;
