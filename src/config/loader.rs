use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/buildchem/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("buildchem").join("config.toml")
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
            tracing::debug!(path = %path.display(), "no config file, using defaults");
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
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `bind_addr` is a socket address
    /// - breakpoints are non-empty, cover width 0, and show at least one item
    /// - autoplay intervals are positive
    /// - the reveal threshold lies in `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::invalid(format!(
                "bind_addr '{}' is not a valid socket address",
                self.server.bind_addr
            )));
        }

        let breakpoints = &self.carousel.breakpoints;
        if breakpoints.is_empty() {
            return Err(ConfigError::invalid(
                "At least one carousel breakpoint must be configured",
            ));
        }
        if !breakpoints.iter().any(|bp| bp.min_width == 0) {
            return Err(ConfigError::invalid(
                "Carousel breakpoints must include min_width = 0",
            ));
        }
        if let Some(bp) = breakpoints.iter().find(|bp| bp.items_per_view == 0) {
            return Err(ConfigError::invalid(format!(
                "Breakpoint at min_width {} must show at least one item",
                bp.min_width
            )));
        }

        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::invalid(
                "carousel.interval_ms must be positive",
            ));
        }
        if self.testimonials.interval_ms == 0 {
            return Err(ConfigError::invalid(
                "testimonials.interval_ms must be positive",
            ));
        }

        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::invalid(format!(
                "reveal.threshold {threshold} must be between 0 and 1"
            )));
        }

        let prefix = &self.storage.media_url_prefix;
        if !prefix.starts_with('/') || prefix.trim_end_matches('/').is_empty() {
            return Err(ConfigError::invalid(format!(
                "storage.media_url_prefix '{prefix}' must be a non-root path starting with '/'"
            )));
        }

        if self.preview.column_width_px == 0 {
            return Err(ConfigError::invalid(
                "preview.column_width_px must be positive",
            ));
        }

        Ok(())
    }
}
