//! Configuration management for wavemap.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "wavemap";

/// Default projects root, relative to the site checkout.
const DEFAULT_ROOT: &str = "images/projects";

/// Default URL base under which media is served.
const DEFAULT_MEDIA_BASE_URL: &str = "/images/projects";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `WAVEMAP_`)
/// 2. TOML config file at `~/.config/wavemap/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan configuration.
    pub scan: ScanConfig,
    /// Map placement configuration.
    pub map: MapConfig,
}

/// Scan-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory holding one subdirectory of media files per project.
    pub root: PathBuf,
    /// URL base prepended to `{project}/{file}` in emitted media paths.
    pub media_base_url: String,
}

/// Map-placement configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Smallest pin offset applied to same-country projects, in percent.
    pub jitter_min_pct: f64,
    /// Largest pin offset applied to same-country projects, in percent.
    pub jitter_max_pct: f64,
    /// Seed for reproducible pin placement. Unset means thread RNG.
    pub jitter_seed: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            jitter_min_pct: 2.0,
            jitter_max_pct: 3.0,
            jitter_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `WAVEMAP_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("WAVEMAP_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.scan.root.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "scan root must not be empty".to_string(),
            });
        }

        if self.scan.media_base_url.is_empty() {
            return Err(Error::ConfigValidation {
                message: "media_base_url must not be empty".to_string(),
            });
        }

        if self.map.jitter_min_pct < 0.0 {
            return Err(Error::ConfigValidation {
                message: format!(
                    "jitter_min_pct ({}) must not be negative",
                    self.map.jitter_min_pct
                ),
            });
        }

        if self.map.jitter_min_pct > self.map.jitter_max_pct {
            return Err(Error::ConfigValidation {
                message: format!(
                    "jitter_min_pct ({}) cannot be greater than jitter_max_pct ({})",
                    self.map.jitter_min_pct, self.map.jitter_max_pct
                ),
            });
        }

        Ok(())
    }

    /// The jitter band as a `(min, max)` pair in percent.
    #[must_use]
    pub fn jitter_band(&self) -> (f64, f64) {
        (self.map.jitter_min_pct, self.map.jitter_max_pct)
    }

    /// The media URL base without any trailing slash.
    #[must_use]
    pub fn media_base_url(&self) -> &str {
        self.scan.media_base_url.trim_end_matches('/')
    }
}
