//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Settings for a [`PathToolkit`](crate::PathToolkit).
///
/// Every field is optional so that partial configurations from different
/// sources can be layered.
///
/// # Examples
///
/// ```
/// use pathkit::config::Config;
/// use pathkit::Platform;
///
/// let config: Config = serde_yaml::from_str("platform: windows\nmax_symlink_depth: 8\n").unwrap();
/// assert_eq!(config.platform, Some(Platform::Windows));
/// assert_eq!(config.max_symlink_depth, Some(8));
/// assert_eq!(config.legacy_safety_check, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Platform whose conventions native paths follow.
    pub platform: Option<Platform>,

    /// Maximum number of links followed during symlink resolution.
    pub max_symlink_depth: Option<usize>,

    /// Reject any path containing `..` as a substring, not just as a segment.
    pub legacy_safety_check: Option<bool>,
}

impl Config {
    /// Overwrite fields of `self` with every field set in `other`.
    pub fn merge_from(&mut self, other: &Self) {
        if other.platform.is_some() {
            self.platform = other.platform;
        }
        if other.max_symlink_depth.is_some() {
            self.max_symlink_depth = other.max_symlink_depth;
        }
        if other.legacy_safety_check.is_some() {
            self.legacy_safety_check = other.legacy_safety_check;
        }
    }
}
