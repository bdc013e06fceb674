//! File collection and output path derivation
//!
//! Utilities for assembling the per-invocation worklist and for placing
//! the files the sinks produce next to their source images.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::exif::errors::{ExifError, ExifResult};

/// Collects the worklist from explicit files and directory listings
///
/// Directory arguments are listed non-recursively and contribute their
/// regular files only. All paths are made absolute up front so result
/// lines and CSV rows reference unambiguous locations. An unreadable
/// directory fails the whole invocation; a missing file is reported
/// later, per file.
///
/// # Arguments
/// * `directories` - Directories whose files should be processed
/// * `files` - Individual files to process
///
/// # Returns
/// The combined list of absolute file paths, or an error
pub fn collect_files(directories: &[PathBuf], files: &[PathBuf]) -> ExifResult<Vec<PathBuf>> {
    let mut collected = Vec::new();

    for directory in directories {
        let listing = fs::read_dir(directory).map_err(|e| {
            ExifError::GenericError(format!("Cannot read directory {}: {}", directory.display(), e))
        })?;

        for dir_entry in listing {
            let path = dir_entry?.path();
            if path.is_file() {
                collected.push(absolute(&path));
            } else {
                debug!("Skipping non-file entry {}", path.display());
            }
        }
    }

    for file in files {
        collected.push(absolute(file));
    }

    Ok(collected)
}

/// Best-effort absolute form of a path
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// CSV path for an image: the extension replaced by `csv`
pub fn csv_output_path(image_path: &Path) -> PathBuf {
    image_path.with_extension("csv")
}

/// Output path for a stripped copy: `<stem>_noEXIF.<ext>` next to the original
pub fn stripped_output_path(image_path: &Path) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{}_noEXIF", stem);
    if let Some(extension) = image_path.extension() {
        name.push('.');
        name.push_str(&extension.to_string_lossy());
    }

    image_path.with_file_name(name)
}
