//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern: one command per mode, each
//! running the same per-file batch loop over a different sink.

pub mod command_traits;
pub mod show_command;
pub mod remove_command;
pub mod save_command;

pub use command_traits::{Command, CommandFactory};
pub use show_command::ShowCommand;
pub use remove_command::RemoveCommand;
pub use save_command::SaveCommand;

use std::path::PathBuf;

use clap::ArgMatches;

use crate::exif::errors::{ExifError, ExifResult};
use crate::utils::file_utils;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the selected mode and creates the appropriate
/// command instance for execution.
pub struct ExifkitCommandFactory;

impl ExifkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ExifkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for ExifkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ExifResult<Box<dyn Command + 'a>> {
        let mode = args
            .get_one::<String>("mode")
            .ok_or_else(|| ExifError::GenericError("Missing mode".to_string()))?;

        match mode.as_str() {
            "show" => Ok(Box::new(ShowCommand::new(args, logger)?)),
            "remove" => Ok(Box::new(RemoveCommand::new(args, logger)?)),
            "save" => Ok(Box::new(SaveCommand::new(args, logger)?)),
            other => Err(ExifError::GenericError(format!("Unknown mode: {}", other))),
        }
    }
}

/// Resolves the per-invocation worklist from the input argument group
///
/// Reads `--files` and `--directories` (clap enforces that exactly one
/// was given) and expands them into the absolute file list the command
/// will iterate.
pub(crate) fn resolve_worklist(args: &ArgMatches) -> ExifResult<Vec<PathBuf>> {
    let directories: Vec<PathBuf> = args
        .get_many::<String>("directories")
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default();

    let files: Vec<PathBuf> = args
        .get_many::<String>("files")
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default();

    file_utils::collect_files(&directories, &files)
}
