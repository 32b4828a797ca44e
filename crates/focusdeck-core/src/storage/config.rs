//! TOML-based application configuration.
//!
//! Stored at `~/.config/focusdeck/config.toml`. Every field has a default so
//! a partial or missing file still loads.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};

/// Housekeeping sweep configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousekeepingConfig {
    /// Days a soft-deleted task survives before the purge sweep removes it.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    /// Whether the archive sweep moves prior-day done tasks to Archived.
    #[serde(default = "default_true")]
    pub archive_done: bool,
}

impl Default for HousekeepingConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            archive_done: default_true(),
        }
    }
}

fn default_retention_days() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/focusdeck/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub housekeeping: HousekeepingConfig,
}

impl Config {
    /// Path to the config file inside the data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when missing.
    pub fn load() -> Result<Config> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(config)
    }

    /// Save the configuration.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
