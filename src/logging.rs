use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::data_dir;
use crate::error::{Result, SnakeError};

const LOG_FILE_NAME: &str = "fruit-snake.log";

/// Default log file location under the platform data directory.
#[must_use]
pub fn default_log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

/// Routes the `log` facade to a file; stdout belongs to the terminal UI.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    WriteLogger::init(level, config, file).map_err(|error| SnakeError::Logging(error.to_string()))
}
