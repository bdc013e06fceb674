//! EXIF data access module
//!
//! This module provides structures and functions for reading the raw
//! EXIF tag table out of image files and resolving tag codes to their
//! standard names.

pub mod errors;
pub mod constants;
pub mod value;
pub mod table;
pub mod dictionary;
pub mod reader;
#[cfg(test)]
mod tests;

pub use errors::{ExifError, ExifResult};
pub use value::TagValue;
pub use table::RawTagTable;
pub use dictionary::{tag_name, TagDictionary};
pub use reader::{format_supports_metadata, ExifReader};
