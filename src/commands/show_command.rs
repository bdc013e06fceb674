//! Terminal metadata display command
//!
//! This module implements the command for showing each file's normalized
//! EXIF metadata in the terminal.

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::commands::resolve_worklist;
use crate::exif::dictionary::TagDictionary;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::reader::ExifReader;
use crate::metadata::extractor::MetadataExtractor;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::utils::terminal;

/// Command for displaying EXIF metadata in the terminal
pub struct ShowCommand<'a> {
    /// Files to process
    files: Vec<PathBuf>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ShowCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        let files = resolve_worklist(args)?;
        debug!("Show command created with {} file(s)", files.len());

        Ok(ShowCommand { files, logger })
    }

    /// Processes one file, printing its result lines above the bar
    ///
    /// Per-file problems are reported and absorbed here so the batch
    /// continues with the next file.
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
        tracker.println(&terminal::success_line(&display, ""));
        for entry in metadata.iter() {
            tracker.println(&format!("\t{}: {}", entry.name, entry.value));
        }
    }
}

impl<'a> Command for ShowCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        info!("Showing EXIF data for {} file(s)", self.files.len());

        let tracker = ProgressTracker::new(self.files.len() as u64, "Reading EXIF data");
        for file in &self.files {
            self.process_file(file, &tracker);
            tracker.increment(1);
        }
        tracker.finish();

        self.logger.log("Show completed")?;
        Ok(())
    }
}
