use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::site;

/// Environment variable naming the catalogue file store.
pub const CATALOGUE_BASE_URL_ENV: &str = "BUCKET_URL";

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

/// Values supplied on the command line. `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub page_url: Option<String>,
    pub catalogue_base_url: Option<String>,
    pub assets_dir: Option<PathBuf>,
    pub disable_mouse: bool,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/vanika/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("vanika").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Apply environment overrides through `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(CATALOGUE_BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.catalogue.base_url = Some(base);
        }
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(page_url) = overrides.page_url {
            self.site.page_url = page_url;
        }
        if let Some(base) = overrides.catalogue_base_url {
            self.catalogue.base_url = Some(base);
        }
        if let Some(dir) = overrides.assets_dir {
            self.ui.assets_dir = Some(dir);
        }
        if overrides.disable_mouse {
            self.ui.mouse = false;
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The tick rate is non-zero
    /// - The page URL is not empty
    /// - The catalogue file name is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.site.page_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "site.page_url must not be empty".to_string(),
            });
        }

        if self.catalogue.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "catalogue.file_name must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Full catalogue document URL, if a file store is configured.
    pub fn catalogue_url(&self) -> Option<String> {
        site::catalogue_url(self.catalogue.base_url.as_deref(), &self.catalogue.file_name)
    }
}
