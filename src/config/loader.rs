use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;
use crate::router::GUARDED_PATHS;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/postdeck/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("postdeck").join("config.toml")
    }

    /// Loads the default config file, or defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates an explicit config file. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The posts URL parses and uses http or https
    /// - The guard fallback is an absolute path outside the guarded routes
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.posts.url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid posts url '{}': {}", self.posts.url, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("Unsupported posts url scheme '{}'", url.scheme()),
            });
        }

        let fallback = &self.auth.fallback;
        if !fallback.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!("Auth fallback '{}' must start with '/'", fallback),
            });
        }
        if GUARDED_PATHS.contains(&fallback.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!("Auth fallback '{}' is itself a guarded route", fallback),
            });
        }

        Ok(())
    }
}
