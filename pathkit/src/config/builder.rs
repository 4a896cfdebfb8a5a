//! Configuration builder for layering configuration sources.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;
use crate::path::toolkit::{PathToolkit, DEFAULT_MAX_SYMLINK_DEPTH};
use crate::platform::Platform;

/// Builder for loading and merging configuration.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigBuilder};
/// use pathkit::Platform;
///
/// let toolkit = ConfigBuilder::new()
///     .skip_env()
///     .with_config(Config {
///         platform: Some(Platform::Windows),
///         ..Default::default()
///     })
///     .build_toolkit()
///     .unwrap();
///
/// assert_eq!(toolkit.platform(), Platform::Windows);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    files: Vec<PathBuf>,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with no configuration files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a YAML configuration file. Later files take precedence.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Skip `PATHKIT_*` environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Build the merged configuration with every default filled in.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, or if an
    /// environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Self::defaults();

        for path in &self.files {
            let file_config = ConfigLoader::load_file(path)?;
            config.merge_from(&file_config);
        }

        if self.skip_env {
            log::trace!("skipping environment overrides");
        } else {
            let mut env_config = Config::default();
            EnvironmentConfig::apply_overrides(&mut env_config)?;
            config.merge_from(&env_config);
        }

        if let Some(ref overrides) = self.overrides {
            config.merge_from(overrides);
        }

        log::debug!("resolved configuration: {config:?}");
        Ok(config)
    }

    /// Build the configuration and turn it into a [`PathToolkit`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`ConfigBuilder::build`].
    pub fn build_toolkit(self) -> Result<PathToolkit> {
        Ok(self.build()?.to_toolkit())
    }

    fn defaults() -> Config {
        Config {
            platform: Some(Platform::current()),
            max_symlink_depth: Some(DEFAULT_MAX_SYMLINK_DEPTH),
            legacy_safety_check: Some(false),
        }
    }
}

impl Config {
    /// Create a [`PathToolkit`] from this configuration.
    ///
    /// Unset fields fall back to the toolkit defaults.
    #[must_use]
    pub fn to_toolkit(&self) -> PathToolkit {
        let mut toolkit = PathToolkit::new();
        if let Some(platform) = self.platform {
            toolkit = toolkit.with_platform(platform);
        }
        if let Some(depth) = self.max_symlink_depth {
            toolkit = toolkit.with_max_symlink_depth(depth);
        }
        if let Some(legacy) = self.legacy_safety_check {
            toolkit = toolkit.with_legacy_safety_check(legacy);
        }
        toolkit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{ENV_MAX_SYMLINK_DEPTH, ENV_PLATFORM};
    use serial_test::serial;
    use std::{env, fs};
    use tempfile::TempDir;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().skip_env().build().unwrap();
        assert_eq!(config.platform, Some(Platform::current()));
        assert_eq!(config.max_symlink_depth, Some(DEFAULT_MAX_SYMLINK_DEPTH));
        assert_eq!(config.legacy_safety_check, Some(false));
    }

    #[test]
    fn test_builder_later_file_wins() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.yaml");
        let second = temp_dir.path().join("second.yaml");
        fs::write(&first, "platform: windows\nmax_symlink_depth: 5\n").unwrap();
        fs::write(&second, "max_symlink_depth: 9\n").unwrap();

        let config = ConfigBuilder::new()
            .with_file(&first)
            .with_file(&second)
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.platform, Some(Platform::Windows));
        assert_eq!(config.max_symlink_depth, Some(9));
    }

    #[test]
    fn test_builder_missing_file_errors() {
        let result = ConfigBuilder::new()
            .with_file("/nonexistent/pathkit.yaml")
            .skip_env()
            .build();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("pathkit.yaml");
        fs::write(&file, "platform: posix\nmax_symlink_depth: 5\n").unwrap();

        env::set_var(ENV_PLATFORM, "windows");
        let result = ConfigBuilder::new().with_file(&file).build();
        env::remove_var(ENV_PLATFORM);

        let config = result.unwrap();
        assert_eq!(config.platform, Some(Platform::Windows));
        assert_eq!(config.max_symlink_depth, Some(5));
    }

    #[test]
    #[serial]
    fn test_programmatic_overrides_env() {
        env::set_var(ENV_MAX_SYMLINK_DEPTH, "3");
        let result = ConfigBuilder::new()
            .with_config(Config {
                max_symlink_depth: Some(11),
                ..Default::default()
            })
            .build();
        env::remove_var(ENV_MAX_SYMLINK_DEPTH);

        assert_eq!(result.unwrap().max_symlink_depth, Some(11));
    }

    #[test]
    fn test_to_toolkit() {
        let config = Config {
            platform: Some(Platform::Windows),
            max_symlink_depth: Some(2),
            legacy_safety_check: Some(true),
        };
        let toolkit = config.to_toolkit();
        assert_eq!(toolkit.platform(), Platform::Windows);
        assert_eq!(toolkit.max_symlink_depth(), 2);
        assert!(toolkit.legacy_safety_check());
    }

    #[test]
    fn test_to_toolkit_empty_uses_defaults() {
        assert_eq!(Config::default().to_toolkit(), PathToolkit::new());
    }
}
