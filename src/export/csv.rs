//! CSV metadata export
//!
//! Writes one CSV file per image, next to the image, holding its
//! normalized metadata as name/value rows.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::exif::errors::ExifResult;
use crate::metadata::extractor::NormalizedMetadata;
use crate::utils::file_utils;

/// Writes normalized metadata to a CSV file beside the source image
pub struct CsvExporter;

impl CsvExporter {
    /// Exports metadata for one image, returning the CSV path
    ///
    /// The file lands at the image path with its extension replaced by
    /// `csv`. The first row names the source file; the remaining rows are
    /// one name/value pair per metadata entry.
    ///
    /// # Arguments
    /// * `image_path` - Path of the image the metadata came from
    /// * `metadata` - The normalized metadata to write
    ///
    /// # Returns
    /// Path of the written CSV file, or an error
    pub fn export(image_path: &Path, metadata: &NormalizedMetadata) -> ExifResult<PathBuf> {
        let image_path = file_utils::absolute(image_path);
        let csv_path = file_utils::csv_output_path(&image_path);

        let file = File::create(&csv_path)?;
        let mut writer = BufWriter::new(file);

        write_row(&mut writer, "File", &image_path.display().to_string())?;
        for entry in metadata.iter() {
            write_row(&mut writer, &entry.name, &entry.value.to_string())?;
        }
        writer.flush()?;

        info!("Wrote {} metadata row(s) to {}", metadata.len(), csv_path.display());
        Ok(csv_path)
    }
}

fn write_row(writer: &mut impl Write, name: &str, value: &str) -> std::io::Result<()> {
    writeln!(writer, "{},{}", escape_field(name), escape_field(value))
}

/// Quotes a field when it contains separators, quotes or line breaks
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
