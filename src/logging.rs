//! File logging.
//!
//! The TUI owns stdout, so log lines go to
//! `<data_local_dir>/app-fotos/app-fotos.log`. The filter comes from
//! `APP_FOTOS_LOG` and defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "APP_FOTOS_LOG";

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "app-fotos.log";

/// Directory holding the log file, if the platform has a data dir.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("app-fotos"))
}

/// Open (append) the log file inside `dir`, creating the directory.
pub fn open_log_file(dir: &Path) -> AppResult<File> {
    fs::create_dir_all(dir).map_err(|e| AppError::io(dir, e))?;
    let path = dir.join(LOG_FILE_NAME);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| AppError::io(&path, e))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log file path. Does nothing if a subscriber is already set.
pub fn init() -> AppResult<Option<PathBuf>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    let file = open_log_file(&dir)?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(Some(dir.join(LOG_FILE_NAME)))
}
