//! EXIF tag table reader
//!
//! This module reads the raw EXIF field table out of an image file. The
//! sniffed image format is checked for metadata support up front, so the
//! absence of an EXIF container is an explicit branch rather than a
//! caught failure; formats with no tag-table concept short-circuit to an
//! empty table. Parsing itself is delegated to the kamadak-exif decoder.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use exif::{Context, In, Reader};
use image::{ImageFormat, ImageReader};
use log::{debug, info};

use crate::exif::constants::tags;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::table::RawTagTable;
use crate::exif::value::TagValue;
use crate::utils::logger::Logger;

/// Reader for raw EXIF tag tables
pub struct ExifReader<'a> {
    /// Logger instance
    logger: &'a Logger,
}

impl<'a> ExifReader<'a> {
    /// Create a new reader
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    pub fn new(logger: &'a Logger) -> Self {
        ExifReader { logger }
    }

    /// Reads the raw tag table from an image file
    ///
    /// The file's format is sniffed first and checked for metadata
    /// support. A supported container without an EXIF block, or a format
    /// with no tag-table concept at all, yields an empty table; that is a
    /// normal outcome, not an error.
    ///
    /// # Arguments
    /// * `path` - Path to the image file
    ///
    /// # Returns
    /// The raw tag table, or an error for unreadable or unrecognized files
    pub fn read_tag_table(&self, path: &Path) -> ExifResult<RawTagTable> {
        if !path.is_file() {
            return Err(ExifError::FileNotFound(path.display().to_string()));
        }

        let format = self.detect_format(path)?;
        if !format_supports_metadata(format) {
            info!("Format {:?} carries no EXIF container: {}", format, path.display());
            return Ok(RawTagTable::new());
        }

        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let table = self.read_tag_table_from(&mut reader)?;

        self.logger.log(&format!(
            "Read {} raw tag(s) from {}",
            table.len(),
            path.display()
        ))?;

        Ok(table)
    }

    /// Reads the raw tag table from a seekable source
    ///
    /// The source must be a container format that can carry EXIF data;
    /// callers going through `read_tag_table` have already checked this.
    ///
    /// # Arguments
    /// * `source` - Seekable source positioned at the start of the container
    ///
    /// # Returns
    /// The raw tag table; empty when the container has no EXIF block
    pub fn read_tag_table_from<R: BufRead + Seek>(&self, source: &mut R) -> ExifResult<RawTagTable> {
        match Reader::new().read_from_container(source) {
            Ok(exif) => Ok(build_table(&exif)),
            Err(exif::Error::NotFound(_)) => {
                debug!("Container has no EXIF block");
                Ok(RawTagTable::new())
            }
            Err(e) => Err(ExifError::from(e)),
        }
    }

    /// Sniffs the image format from the file contents
    fn detect_format(&self, path: &Path) -> ExifResult<ImageFormat> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        reader
            .format()
            .ok_or_else(|| ExifError::UnsupportedFormat(path.display().to_string()))
    }
}

/// Whether a container format can carry an EXIF block
///
/// This is the declared-capability check the per-file flow branches on;
/// formats outside this set have no tag table to read.
pub fn format_supports_metadata(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg
            | ImageFormat::Tiff
            | ImageFormat::Png
            | ImageFormat::WebP
            | ImageFormat::Avif
    )
}

/// Builds the flat raw tag table from decoded EXIF fields
///
/// Primary-image fields from the 0th IFD and the Exif sub-IFD merge into
/// one table keyed by tag code. GPS fields collect into a nested table
/// stored under the GPSInfo code, mirroring the pointer tag the decoder
/// consumed while parsing. Thumbnail-IFD duplicates are ignored.
fn build_table(exif: &exif::Exif) -> RawTagTable {
    let mut table = RawTagTable::new();
    let mut gps = RawTagTable::new();

    for field in exif.fields() {
        if field.ifd_num != In::PRIMARY {
            continue;
        }

        match field.tag.context() {
            Context::Tiff | Context::Exif => {
                table.insert(field.tag.number(), TagValue::from_raw(&field.value));
            }
            Context::Gps => {
                gps.insert(field.tag.number(), TagValue::from_raw(&field.value));
            }
            _ => {
                debug!("Ignoring field {} outside the primary contexts", field.tag);
            }
        }
    }

    if !gps.is_empty() {
        table.insert(tags::GPS_INFO, TagValue::SubTable(gps));
    }

    table
}
