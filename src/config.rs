//! Configuration file handling for pset-tools.
//!
//! Loads configuration from `~/.config/pset-tools/config.toml`, or from the
//! path in `PSET_TOOLS_CONFIG` when that variable is set.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an alternate config file.
pub const CONFIG_PATH_ENV: &str = "PSET_TOOLS_CONFIG";

/// Configuration file structure for pset-tools.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub price: PriceConfig,
    #[serde(default)]
    pub fonts: FontConfig,
}

/// `[price]` section, used by `bitcoin`.
#[derive(Debug, Deserialize, Default)]
pub struct PriceConfig {
    /// Price endpoint URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Whole-request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl PriceConfig {
    /// Configured timeout; zero counts as unset.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}

/// `[fonts]` section, used by `figlet`.
#[derive(Debug, Deserialize, Default)]
pub struct FontConfig {
    /// Extra directories searched for `.flf` fonts.
    #[serde(default)]
    pub dirs: Vec<PathBuf>,
    /// Font used when no `--font` is given.
    #[serde(default)]
    pub default: Option<String>,
}

impl FontConfig {
    /// Configured font directories with a leading `~` expanded.
    pub fn expanded_dirs(&self) -> Vec<PathBuf> {
        self.dirs.iter().map(|d| expand_home(d)).collect()
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

impl Config {
    /// Load configuration from `path`, or from [`default_path`] if `None`.
    ///
    /// A missing file yields the defaults; an unreadable, malformed or
    /// out-of-range file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.validate().map_err(|reason| ConfigError::Invalid {
            path: path.clone(),
            reason,
        })?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `PSET_TOOLS_CONFIG` if set, otherwise from the default path.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load(path.as_deref())
    }

    fn validate(&self) -> Result<(), String> {
        if self.price.timeout_secs == Some(0) {
            return Err("price.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config file '{}': {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

/// `<config_dir>/pset-tools/config.toml`, falling back to `~/.config`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pset-tools")
        .join("config.toml")
}
