//! CLI configuration.

use std::path::PathBuf;

use monthboard_core::error::{MonthboardError, MonthboardResult};
use serde::{Deserialize, Serialize};

/// Configuration stored as `monthboard/config.toml` in the user config
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Provider binary suffix: "google" runs `monthboard-provider-google`.
    pub provider: String,
    /// Calendar ids to display; empty shows everything the provider lists.
    #[serde(default)]
    pub calendars: Vec<String>,
    /// Seconds between refreshes in watch mode.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

fn default_refresh_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider: "google".to_string(),
            calendars: Vec::new(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl Config {
    pub fn path() -> MonthboardResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            MonthboardError::Config("No config directory on this platform".to_string())
        })?;
        Ok(dir.join("monthboard").join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load() -> MonthboardResult<Self> {
        let path = Self::path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| MonthboardError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }
}
