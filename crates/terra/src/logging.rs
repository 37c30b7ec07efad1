//! File logging. The terminal belongs to the dashboard, so log lines go to
//! `terra.log` under the platform data directory.

use std::fs::{self, File};
use std::path::PathBuf;

use color_eyre::eyre::eyre;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use terra_config::Config;

const LOG_FILE: &str = "terra.log";

/// Start logging at `level`. Returns the log file path, or `None` when
/// logging is off.
pub fn init(level: LevelFilter) -> color_eyre::Result<Option<PathBuf>> {
    if level == LevelFilter::Off {
        return Ok(None);
    }

    let dirs = Config::project_dirs().ok_or_else(|| eyre!("no data directory for logs"))?;
    let dir = dirs.data_dir();
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();
    WriteLogger::init(level, config, File::create(&path)?)?;
    log::info!(target: "startup", "logging to {}", path.display());
    Ok(Some(path))
}
