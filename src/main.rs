use clap::{Arg, ArgAction, ArgGroup, Command as ClapCommand};
use std::process;
use log::{error, LevelFilter};

// Import from your library
use exifkit::utils::logger::Logger;
use exifkit::commands::{CommandFactory, ExifkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("ExifKit")
        .version("1.0")
        .about("Show, remove or export EXIF metadata from image files")
        .arg(
            Arg::new("mode")
                .help("What to do with each file's EXIF data")
                .value_parser(["show", "remove", "save"])
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("directories")
                .short('d')
                .long("directories")
                .help("Directories containing the image files (not recursive)")
                .value_name("DIRECTORY")
                .num_args(1..),
        )
        .arg(
            Arg::new("files")
                .short('f')
                .long("files")
                .help("Image files to work with")
                .value_name("FILE")
                .num_args(1..),
        )
        .group(
            ArgGroup::new("inputs")
                .args(["directories", "files"])
                .required(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "exifkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("exifkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    if matches.get_flag("verbose") {
        log::set_max_level(LevelFilter::Debug);
    }

    let factory = ExifkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
