//! CSV export command
//!
//! This module implements the command for exporting each file's
//! normalized EXIF metadata to a CSV file next to the image.

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::commands::resolve_worklist;
use crate::exif::dictionary::TagDictionary;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::reader::ExifReader;
use crate::export::csv::CsvExporter;
use crate::metadata::extractor::MetadataExtractor;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::utils::terminal;

/// Command for exporting EXIF metadata to CSV files
pub struct SaveCommand<'a> {
    /// Files to process
    files: Vec<PathBuf>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SaveCommand<'a> {
    /// Create a new save command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new SaveCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        let files = resolve_worklist(args)?;
        debug!("Save command created with {} file(s)", files.len());

        Ok(SaveCommand { files, logger })
    }

    /// Processes one file, printing its result line above the bar
    fn process_file(&self, path: &Path, tracker: &ProgressTracker) {
        let display = path.display().to_string();
        let reader = ExifReader::new(self.logger);

        let table = match reader.read_tag_table(path) {
            Ok(table) => table,
            Err(ExifError::FileNotFound(_)) => {
                tracker.println(&terminal::failure_line(&display, "file does not exist"));
                return;
            }
            Err(ExifError::UnsupportedFormat(_)) => {
                tracker.println(&terminal::failure_line(&display, "file type not supported"));
                return;
            }
            Err(e) => {
                warn!("Failed to read {}: {}", display, e);
                tracker.println(&terminal::failure_line(&display, &e.to_string()));
                return;
            }
        };

        if table.is_empty() {
            info!("No EXIF data in {}", display);
            tracker.println(&terminal::failure_line(&display, "no EXIF data"));
            return;
        }

        let metadata = MetadataExtractor::extract(&table, TagDictionary::standard());
        match CsvExporter::export(path, &metadata) {
            Ok(csv_path) => {
                tracker.println(&terminal::success_line(
                    &display,
                    &csv_path.display().to_string(),
                ));
            }
            Err(e) => {
                warn!("Failed to export {}: {}", display, e);
                tracker.println(&terminal::failure_line(&display, &e.to_string()));
            }
        }
    }
}

impl<'a> Command for SaveCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        info!("Exporting EXIF data for {} file(s)", self.files.len());

        let tracker = ProgressTracker::new(self.files.len() as u64, "Exporting EXIF data");
        for file in &self.files {
            self.process_file(file, &tracker);
            tracker.increment(1);
        }
        tracker.finish();

        self.logger.log("Save completed")?;
        Ok(())
    }
}
