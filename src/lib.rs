pub mod exif;
pub mod metadata;
pub mod export;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::ExifKit;

pub use crate::exif::{ExifError, ExifReader, ExifResult, RawTagTable, TagValue};
pub use crate::metadata::{to_decimal_degrees, MetadataExtractor, NormalizedMetadata};
pub use crate::export::{CsvExporter, ExifStripper};
