//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable the session token is read from.
pub const SESSION_ENV: &str = "GRADECAST_SESSION";

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading or writing the config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required setting is missing.
    #[error("Missing setting: {0}")]
    Missing(&'static str),
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Portal settings.
    #[serde(default)]
    pub portal: PortalConfig,
}

/// Portal connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Base URL of the district's HAC deployment
    /// (e.g. "https://homeaccess.example.k12.tx.us").
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradecast")
            .join("config.json")
    }

    /// Loads configuration from the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Loads configuration from a specific path.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Saves configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::default_path())
    }

    /// Saves configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Resolves the portal base URL from an override or the config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` when neither is set.
    pub fn resolve_base_url(&self, flag: Option<&str>) -> Result<String, ConfigError> {
        flag.map(ToString::to_string)
            .or_else(|| self.portal.base_url.clone())
            .ok_or(ConfigError::Missing(
                "portal base URL (--base-url or `gradecast config set-url ...`)",
            ))
    }
}

/// Resolves the session token: flag first, then the environment.
///
/// # Errors
///
/// Returns `ConfigError::Missing` when neither is set.
pub fn resolve_session(flag: Option<&str>) -> Result<String, ConfigError> {
    flag.map(ToString::to_string)
        .or_else(|| std::env::var(SESSION_ENV).ok())
        .ok_or(ConfigError::Missing("session token (--session or GRADECAST_SESSION)"))
}

// ============================================================================
// Tests
// ============================================================================
