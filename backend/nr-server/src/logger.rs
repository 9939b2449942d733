//! fern logger setup: stdout (optionally colored) or an append-only file.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Initialize the global logger.
///
/// `log_file` wins over stdout; `colored` only applies to stdout.
pub fn initialize(
    log_level: nr_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter: LevelFilter = log_level.into();

    let sink = match &log_file {
        Some(path) => Dispatch::new()
            .format(plain_line)
            .chain(open_log_file(path)?),
        None if colored => {
            let colors = level_colors();
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new()
            .format(plain_line)
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match &log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

fn plain_line(out: FormatCallback, message: &Arguments, record: &Record) {
    write_line(out, message, record, record.level());
}

fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    level: impl std::fmt::Display,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
