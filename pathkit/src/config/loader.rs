//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Loads configuration from YAML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.display().to_string(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        log::debug!("loaded configuration from {}", path.display());
        Self::load_str(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or contains unknown fields.
    pub fn load_str(contents: &str) -> Result<Config> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
