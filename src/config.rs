//! Configuration management module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub options: OptionsConfig,
}

/// Roster service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Selectable options offered by the add-employee dialog.
///
/// The dialog defaults to the first entry of each list, so both lists must
/// be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    pub colors: Vec<String>,
    pub branches: Vec<String>,
}

impl AppConfig {
    /// Get config file path (same directory as executable).
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.url.trim().is_empty() {
            return Err(ConfigError::Validation("API URL cannot be empty".to_string()));
        }
        if !self.api.url.starts_with("http") {
            return Err(ConfigError::Validation(
                "API URL must start with http:// or https://".to_string(),
            ));
        }
        if self.api.timeout_secs < 1 {
            return Err(ConfigError::Validation(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.options.colors.is_empty() {
            return Err(ConfigError::Validation(
                "At least one color option is required".to_string(),
            ));
        }
        if self.options.branches.is_empty() {
            return Err(ConfigError::Validation(
                "At least one branch option is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                "blue".to_string(),
                "green".to_string(),
                "red".to_string(),
                "yellow".to_string(),
                "white".to_string(),
                "black".to_string(),
            ],
            branches: vec![
                "main".to_string(),
                "north".to_string(),
                "south".to_string(),
                "east".to_string(),
            ],
        }
    }
}
