//! String utility functions
//!
//! Utilities for text decoded from raw EXIF fields.

use std::borrow::Cow;

/// Decodes raw ASCII tag bytes, substituting undecodable sequences
///
/// EXIF text fields are nominally ASCII but cameras routinely write
/// arbitrary bytes into them; invalid sequences become replacement
/// characters instead of failing the whole tag.
pub fn decode_tag_text(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => trim_tag_text(text).to_string(),
        Cow::Owned(text) => trim_tag_text(&text).to_string(),
    }
}

/// Trims trailing null and padding characters from decoded tag text
pub fn trim_tag_text(text: &str) -> &str {
    text.trim_end_matches(['\0', ' '])
}
