use std::path::{Path, PathBuf};

use log::info;

use crate::exif::dictionary::TagDictionary;
use crate::exif::errors::ExifResult;
use crate::exif::reader::ExifReader;
use crate::exif::table::RawTagTable;
use crate::export::csv::CsvExporter;
use crate::export::strip::ExifStripper;
use crate::metadata::extractor::{MetadataExtractor, NormalizedMetadata};
use crate::utils::logger::Logger;

/// Main interface to the ExifKit library
pub struct ExifKit {
    logger: Logger,
}

impl ExifKit {
    /// Create a new ExifKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "exifkit.log"
    ///
    /// # Returns
    /// An ExifKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ExifResult<Self> {
        let log_path = log_file.unwrap_or("exifkit.log");
        let logger = Logger::new(log_path)?;
        Ok(ExifKit { logger })
    }

    /// Read the raw tag table from an image file
    ///
    /// The table is empty for images whose format has no EXIF container
    /// or whose container carries no EXIF block.
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    ///
    /// # Returns
    /// The raw tag table or an error
    pub fn read_raw_table(&self, input_path: &str) -> ExifResult<RawTagTable> {
        let reader = ExifReader::new(&self.logger);
        reader.read_tag_table(Path::new(input_path))
    }

    /// Read and normalize the metadata for an image file
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    ///
    /// # Returns
    /// The normalized name-to-value metadata or an error
    pub fn read_metadata(&self, input_path: &str) -> ExifResult<NormalizedMetadata> {
        let table = self.read_raw_table(input_path)?;
        Ok(MetadataExtractor::extract(&table, TagDictionary::standard()))
    }

    /// Write a metadata-free copy of an image
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    ///
    /// # Returns
    /// Path of the stripped copy or an error
    pub fn strip(&self, input_path: &str) -> ExifResult<PathBuf> {
        info!("Stripping metadata from {}", input_path);
        ExifStripper::strip(Path::new(input_path))
    }

    /// Export an image's normalized metadata to a CSV file
    ///
    /// The CSV lands next to the image with its extension replaced
    /// by `csv`.
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    ///
    /// # Returns
    /// Path of the written CSV file or an error
    pub fn export_csv(&self, input_path: &str) -> ExifResult<PathBuf> {
        let metadata = self.read_metadata(input_path)?;
        CsvExporter::export(Path::new(input_path), &metadata)
    }
}
