//! Metadata normalization module
//!
//! This module holds the coordinate conversion and tag normalization
//! logic that turns raw tag tables into display-ready metadata.

pub mod coordinate;
pub mod extractor;

pub use coordinate::to_decimal_degrees;
pub use extractor::{MetadataEntry, MetadataExtractor, NormalizedMetadata};
