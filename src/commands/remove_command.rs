//! EXIF removal command
//!
//! This module implements the command for writing metadata-free copies
//! of image files.

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::commands::resolve_worklist;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::reader::ExifReader;
use crate::export::strip::ExifStripper;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::utils::terminal;

/// Command for writing metadata-free copies of images
pub struct RemoveCommand<'a> {
    /// Files to process
    files: Vec<PathBuf>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> RemoveCommand<'a> {
    /// Create a new remove command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new RemoveCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        let files = resolve_worklist(args)?;
        debug!("Remove command created with {} file(s)", files.len());

        Ok(RemoveCommand { files, logger })
    }

    /// Processes one file, printing its result line above the bar
    ///
    /// Files without any EXIF data are reported and skipped; there is
    /// nothing to remove from them.
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

        match ExifStripper::strip(path) {
            Ok(output_path) => {
                tracker.println(&terminal::success_line(
                    &display,
                    &output_path.display().to_string(),
                ));
            }
            Err(e) => {
                warn!("Failed to strip {}: {}", display, e);
                tracker.println(&terminal::failure_line(&display, &e.to_string()));
            }
        }
    }
}

impl<'a> Command for RemoveCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        info!("Removing EXIF data from {} file(s)", self.files.len());

        let tracker = ProgressTracker::new(self.files.len() as u64, "Removing EXIF data");
        for file in &self.files {
            self.process_file(file, &tracker);
            tracker.increment(1);
        }
        tracker.finish();

        self.logger.log("Remove completed")?;
        Ok(())
    }
}
