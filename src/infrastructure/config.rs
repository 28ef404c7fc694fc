// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::DEFAULT_NAME_LENGTH;

/// TOML configuration for cardbox
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DeckConfig {
    /// Deck directory; empty means the platform default is used.
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Length of generated card file names.
    #[serde(default = "default_name_length")]
    pub name_length: usize,
}

// Default value functions
fn default_dir() -> String {
    String::new()
}
fn default_name_length() -> usize {
    DEFAULT_NAME_LENGTH
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            name_length: default_name_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}
