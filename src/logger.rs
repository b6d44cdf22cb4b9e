//! Logging setup.
//!
//! Everything logs through the `log` facade. [`init`] installs a `fern`
//! dispatcher that writes timestamped lines to stderr and, when file logging
//! is enabled, to `todolist.log` in the data directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::{Config, LoggingConfig};
use crate::constants::LOG_FILE_NAME;

/// Install the global logger. Fails if a logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = config.level_filter()?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // SQL statement logging is far too chatty at debug.
        .level_for("sqlx", log::LevelFilter::Warn)
        .level_for("sea_orm", log::LevelFilter::Warn)
        .chain(std::io::stderr());

    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Logger already initialized")?;
    Ok(())
}

/// Location of the log file when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(Config::get_data_dir()?.join(LOG_FILE_NAME))
}
