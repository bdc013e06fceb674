//! Output sinks for extracted metadata
//!
//! This module provides the two file-producing sinks: per-image CSV
//! export and metadata-free image copies.

pub mod csv;
pub mod strip;

pub use csv::CsvExporter;
pub use strip::ExifStripper;
