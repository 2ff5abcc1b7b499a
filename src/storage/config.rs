//! Application configuration.
//!
//! Defaults for new sessions, stored as TOML in the platform data directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::export::DEFAULT_CSV_FILENAME;
use crate::laps::increment::DEFAULT_INCREMENT_STEP;
use crate::laps::types::{default_base_lap, deserialize_lap_count, Interval};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Defaults applied to new sessions
    #[serde(default)]
    pub defaults: SessionDefaults,
    /// Export settings
    #[serde(default)]
    pub export: ExportSettings,
    /// Base lap used for new sessions and resets
    #[serde(default = "default_base_lap")]
    pub base_lap: Vec<Interval>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            defaults: SessionDefaults::default(),
            export: ExportSettings::default(),
            base_lap: default_base_lap(),
        }
    }
}

/// Session defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDefaults {
    /// Number of laps
    #[serde(deserialize_with = "deserialize_lap_count")]
    pub lap_count: usize,
    /// Repeat the base lap for every lap
    pub replicate: bool,
    /// Derive the speed ladder when the first speed changes
    pub auto_increment: bool,
    /// Ladder step in km/h
    pub increment_step: f64,
    /// Cascade the ladder into lap overrides
    pub propagate_to_overrides: bool,
    /// Target pace as `M:SS`
    pub target_pace: String,
    /// Stop the walk at the goal distance
    pub goal_enabled: bool,
    /// Goal distance in km
    pub goal_distance_km: f64,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            lap_count: 1,
            replicate: true,
            auto_increment: false,
            increment_step: DEFAULT_INCREMENT_STEP,
            propagate_to_overrides: false,
            target_pace: "5:30".to_string(),
            goal_enabled: false,
            goal_distance_km: 5.0,
        }
    }
}

/// Export-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// File name used when no output path is given
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_CSV_FILENAME.to_string(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "hiitlap", "HiitLap")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load configuration from a file, falling back to defaults when it is missing.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    for interval in &mut config.base_lap {
        *interval = interval.sanitized();
    }
    config.defaults.lap_count = config.defaults.lap_count.max(1);

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to a file, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::info!("Saved configuration to {}", path.display());
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
