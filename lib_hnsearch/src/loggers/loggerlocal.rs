//! # Local Logger Setup
//!
//! Installs a `fern` dispatcher as the global `log` backend: coloured records
//! on stderr and, when a log directory is given, plain records in a
//! timestamped file `<app_name>_<YYYY-mm-dd_HH-MM-SS>.log`. Older files of the
//! same application are pruned so only the most recent one survives.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};
use thiserror::Error;

/// Errors raised while installing the logger.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The log directory or file could not be prepared.
    #[error("I/O error occurred: {0}")]
    Io(#[from] io::Error),
    /// A global logger was already installed.
    #[error("logger already initialized: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

/// Maps a level name to a filter. Unknown names fall back to `Info`.
///
/// `fatal` is accepted as an alias of `error`, `silly` of `trace`.
pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "fatal" | "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" | "silly" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn colored_level(level: Level) -> ColoredString {
    let name = level.as_str();
    match level {
        Level::Error => name.bright_red(),
        Level::Warn => name.bright_yellow(),
        Level::Info => name.bright_green(),
        Level::Debug => name.bright_white(),
        Level::Trace => name.bright_cyan(),
    }
}

/// Deletes all but the `keep` newest `<app_name>_*.log` files in `log_dir`.
///
/// File names embed a sortable timestamp, so name order is age order.
/// Returns the number of files removed.
pub fn prune_old_logs(log_dir: &Path, app_name: &str, keep: usize) -> io::Result<usize> {
    let prefix = format!("{app_name}_");
    let mut log_files: Vec<PathBuf> = fs::read_dir(log_dir)?
        .filter_map(|res| res.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
        })
        .collect();

    // Newest first
    log_files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

    let mut removed = 0;
    for old_file in log_files.iter().skip(keep) {
        match fs::remove_file(old_file) {
            Ok(()) => removed += 1,
            Err(e) => eprintln!("Failed to delete old log file {}: {}", old_file.display(), e),
        }
    }
    Ok(removed)
}

/// Installs the global logger.
///
/// # Arguments
/// * `app_name` - Prefix of the log file name.
/// * `log_dir` - Directory for the log file; `None` logs to stderr only.
/// * `log_level` - Level name, see [`parse_level`].
///
/// # Returns
/// The path of the log file in use, if any.
///
/// # Errors
/// Fails when the directory cannot be created, the file cannot be opened, or
/// a logger is already installed.
pub fn setup_logging(
    app_name: &str,
    log_dir: Option<&Path>,
    log_level: &str,
) -> Result<Option<PathBuf>, LoggerError> {
    let console = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                Local::now()
                    .format("[%Y-%m-%d %H:%M:%S]")
                    .to_string()
                    .truecolor(128, 128, 128),
                record.target(),
                colored_level(record.level()),
                message
            ))
        })
        .chain(io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .level(parse_level(log_level))
        .chain(console);

    let mut log_path = None;
    if let Some(dir) = log_dir {
        fs::create_dir_all(dir)?;
        prune_old_logs(dir, app_name, 1)?;

        let file_name = format!("{}_{}.log", app_name, Local::now().format("%Y-%m-%d_%H-%M-%S"));
        let path = dir.join(file_name);
        let file = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{}[{}][{}] {}",
                    Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    record.target(),
                    record.level(),
                    message
                ))
            })
            .chain(fern::log_file(&path)?);
        dispatch = dispatch.chain(file);
        log_path = Some(path);
    }

    dispatch.apply()?;
    Ok(log_path)
}
