use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::error::{Result, SnakeError};
use crate::food::FruitKind;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 15;

/// Smallest grid edge that still leaves room for a snake and a fruit.
pub const MIN_GRID_EDGE: u16 = 2;

/// Base tick interval in milliseconds (10 ticks per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 20;

/// Terminal columns used to draw one grid cell, so cells look square.
pub const CELL_COLUMNS: u16 = 2;

const APP_DIR_NAME: &str = "fruit-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Resolved runtime settings for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub grid: GridSize,
    pub tick_interval_ms: u64,
    pub fruits: Vec<FruitKind>,
    pub mute: bool,
    /// Color overrides keyed by theme token (`snake`, `apple`, ...).
    pub colors: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            fruits: FruitKind::ALL.to_vec(),
            mute: false,
            colors: HashMap::new(),
        }
    }
}

/// On-disk configuration. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub tick_interval_ms: Option<u64>,
    pub fruits: Option<Vec<String>>,
    pub mute: Option<bool>,
    pub colors: HashMap<String, String>,
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub tick_interval_ms: Option<u64>,
    pub mute: bool,
}

impl Settings {
    /// Builds settings from defaults, then the config file, then overrides.
    pub fn resolve(file: Option<ConfigFile>, overrides: Overrides) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(file) = file {
            settings.apply_file(file)?;
        }

        if let Some(width) = overrides.width {
            settings.grid.width = width;
        }
        if let Some(height) = overrides.height {
            settings.grid.height = height;
        }
        if let Some(tick_interval_ms) = overrides.tick_interval_ms {
            settings.tick_interval_ms = tick_interval_ms;
        }
        settings.mute |= overrides.mute;

        settings.validate()?;
        Ok(settings)
    }

    fn apply_file(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(width) = file.width {
            self.grid.width = width;
        }
        if let Some(height) = file.height {
            self.grid.height = height;
        }
        if let Some(tick_interval_ms) = file.tick_interval_ms {
            self.tick_interval_ms = tick_interval_ms;
        }
        if let Some(names) = file.fruits {
            self.fruits = names
                .iter()
                .map(|name| name.parse::<FruitKind>())
                .collect::<Result<Vec<_>>>()?;
        }
        if let Some(mute) = file.mute {
            self.mute = mute;
        }
        self.colors.extend(file.colors);

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.grid.width < MIN_GRID_EDGE || self.grid.height < MIN_GRID_EDGE {
            return Err(SnakeError::InvalidConfig(format!(
                "grid must be at least {MIN_GRID_EDGE}x{MIN_GRID_EDGE}, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }
        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(SnakeError::InvalidConfig(format!(
                "tick interval must be at least {MIN_TICK_INTERVAL_MS} ms, got {}",
                self.tick_interval_ms
            )));
        }
        if self.fruits.is_empty() {
            return Err(SnakeError::InvalidConfig(
                "at least one fruit must be enabled".to_owned(),
            ));
        }

        Ok(())
    }
}

/// Returns the platform-correct default config file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}

/// Loads a config file.
///
/// An explicitly requested path must exist. The default path is optional and
/// yields `Ok(None)` when missing.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => match default_config_path() {
            Some(path) => match load_config_from_path(&path) {
                Err(SnakeError::ConfigRead { source, .. })
                    if source.kind() == io::ErrorKind::NotFound =>
                {
                    Ok(None)
                }
                other => other.map(Some),
            },
            None => Ok(None),
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let raw = fs::read_to_string(path).map_err(|source| SnakeError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let file = parse_config(&raw).map_err(|source| SnakeError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded config from {}", path.display());
    Ok(file)
}

fn parse_config(raw: &str) -> serde_json::Result<ConfigFile> {
    serde_json::from_str(raw)
}

/// Returns the directory used for runtime data such as the log file.
#[must_use]
pub fn data_dir() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base
}
