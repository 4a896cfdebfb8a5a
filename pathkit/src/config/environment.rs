//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHKIT_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::platform::Platform;

/// Selects the platform for native paths.
pub const ENV_PLATFORM: &str = "PATHKIT_PLATFORM";
/// Sets the maximum symlink depth.
pub const ENV_MAX_SYMLINK_DEPTH: &str = "PATHKIT_MAX_SYMLINK_DEPTH";
/// Enables the substring-based safety rule.
pub const ENV_LEGACY_SAFETY_CHECK: &str = "PATHKIT_LEGACY_SAFETY_CHECK";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown platform, non-numeric depth, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ENV_PLATFORM) {
            let platform = Platform::parse(&val).map_err(|message| Error::Validation {
                field: ENV_PLATFORM.into(),
                message,
            })?;
            log::debug!("{ENV_PLATFORM} overrides platform to {platform}");
            config.platform = Some(platform);
        }

        if let Ok(val) = env::var(ENV_MAX_SYMLINK_DEPTH) {
            let depth = val.trim().parse().map_err(|_| Error::Validation {
                field: ENV_MAX_SYMLINK_DEPTH.into(),
                message: format!("Must be a non-negative integer, got '{val}'"),
            })?;
            config.max_symlink_depth = Some(depth);
        }

        if let Ok(val) = env::var(ENV_LEGACY_SAFETY_CHECK) {
            config.legacy_safety_check = Some(Self::parse_bool(ENV_LEGACY_SAFETY_CHECK, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
