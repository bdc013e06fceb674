//! EXIF tag dictionary
//!
//! This module provides the standard tag-code-to-name lookup used to turn
//! numeric tag codes into canonical names. The table is an external
//! standard, not something this tool owns, so it lives in a data file
//! (`exif_tags.toml`) that is embedded at build time and parsed once.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::exif::errors::{ExifError, ExifResult};

lazy_static! {
    // Parse the embedded TOML file at startup
    static ref EXIF_DEFINITIONS: TagDictionary = {
        let content = include_str!("../../exif_tags.toml");
        TagDictionary::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse EXIF tag definitions: {}", e);
            TagDictionary::default()
        })
    };
}

/// Container for tag code definitions
#[derive(Debug, Default)]
pub struct TagDictionary {
    /// Maps tag codes to canonical names
    pub tag_names: HashMap<u16, String>,
}

impl TagDictionary {
    /// Parse tag definitions from a TOML string
    pub fn from_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ExifError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut dictionary = TagDictionary::default();

        if let Some(table) = toml_value.get("tag_ids").and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let (Ok(code), Some(name)) = (k.parse::<u16>(), v.as_str()) {
                    dictionary.tag_names.insert(code, name.to_string());
                }
            }
        }

        Ok(dictionary)
    }

    /// The standard dictionary parsed from the embedded definitions
    pub fn standard() -> &'static TagDictionary {
        &EXIF_DEFINITIONS
    }

    /// Resolves a tag code to its canonical name
    ///
    /// Returns None for codes the standard does not define; such tags
    /// are omitted from normalized output entirely.
    pub fn lookup(&self, code: u16) -> Option<&str> {
        self.tag_names.get(&code).map(String::as_str)
    }
}

/// Resolves a tag code against the standard dictionary
pub fn tag_name(code: u16) -> Option<&'static str> {
    TagDictionary::standard().lookup(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::constants::tags;

    #[test]
    fn test_standard_dictionary_knows_common_tags() {
        assert_eq!(tag_name(tags::MAKE), Some("Make"));
        assert_eq!(tag_name(tags::MODEL), Some("Model"));
        assert_eq!(tag_name(tags::GPS_INFO), Some("GPSInfo"));
        assert_eq!(tag_name(tags::DATE_TIME_ORIGINAL), Some("DateTimeOriginal"));
        assert_eq!(tag_name(tags::MAKER_NOTE), Some("MakerNote"));
    }

    #[test]
    fn test_unknown_code_has_no_name() {
        assert_eq!(tag_name(0xFFFE), None);
    }

    #[test]
    fn test_from_str_rejects_malformed_toml() {
        assert!(TagDictionary::from_str("not [valid toml").is_err());
    }

    #[test]
    fn test_from_str_ignores_unparsable_entries() {
        let dictionary = TagDictionary::from_str(
            "[tag_ids]\n271 = \"Make\"\n\"not-a-number\" = \"Bogus\"\n",
        )
        .unwrap();
        assert_eq!(dictionary.lookup(271), Some("Make"));
        assert_eq!(dictionary.tag_names.len(), 1);
    }
}
