//! Logging initialization for the hanoi binary.
//!
//! The board is drawn on stdout, so by default records go to `hanoi.log`
//! inside the state directory instead of the terminal.

use std::fs::File;

use clap::ValueEnum;
use hanoi_store::StateStore;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "hanoi.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to `hanoi.log` in the state directory.
    File,
    /// Write to the terminal: errors to stderr, everything else to stdout.
    Terminal,
    /// Write to both file and terminal.
    Both,
    /// Do not log.
    Off,
}

/// Initialize the logger with the specified destination.
pub fn initialize(destination: LogDestination, verbose: bool, store: &StateStore) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::Off => return,
        LogDestination::File => match create_file_logger(level, config, store) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Terminal => {
            vec![TermLogger::new(
                level,
                config,
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]
        }
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(level, config, store) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    store: &StateStore,
) -> Option<Box<WriteLogger<File>>> {
    if let Err(err) = store.prepare() {
        eprintln!("Warning: {err}; logging disabled");
        return None;
    }
    let log_path = store.path(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {log_path:?}: {err}");
            None
        }
    }
}
