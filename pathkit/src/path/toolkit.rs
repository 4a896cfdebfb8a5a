//! A configured entry point to every path operation.
//!
//! This module provides the `PathToolkit` type, which binds a [`Platform`]
//! and a few settings once so that callers do not have to thread them
//! through every call.

use std::env;

use crate::error::Result;
use crate::path::{canonicalize, native, normalize, relationship, windows};
use crate::platform::{PathKind, Platform};

/// Default number of links [`PathToolkit::resolve_symlinks`] follows.
pub const DEFAULT_MAX_SYMLINK_DEPTH: usize = 40;

/// Applies path operations with a fixed platform and settings.
///
/// # Examples
///
/// ```
/// use pathkit::{PathKind, PathToolkit, Platform};
///
/// let toolkit = PathToolkit::new().with_platform(Platform::Windows);
///
/// assert_eq!(toolkit.strip_drive_letter("C:\\Users\\test"), "Users\\test");
/// assert_eq!(toolkit.from_virtual_path("app/src"), "app\\src");
/// assert_eq!(toolkit.normalize_path("C:/a/../b", PathKind::Native), "C:\\b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathToolkit {
    /// Platform whose conventions native paths follow.
    platform: Platform,
    /// Maximum number of links followed by symlink resolution.
    max_symlink_depth: usize,
    /// Use the substring `..` rule instead of the segment rule.
    legacy_safety_check: bool,
}

impl Default for PathToolkit {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            max_symlink_depth: DEFAULT_MAX_SYMLINK_DEPTH,
            legacy_safety_check: false,
        }
    }
}

impl PathToolkit {
    /// Create a toolkit for the current platform with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the platform used for native paths.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Configure the maximum symlink depth.
    ///
    /// A depth of zero disables symlink resolution.
    #[must_use]
    pub fn with_max_symlink_depth(mut self, depth: usize) -> Self {
        self.max_symlink_depth = depth;
        self
    }

    /// Select the substring-based safety rule.
    ///
    /// See [`relationship::validate_path_safety_legacy`].
    #[must_use]
    pub fn with_legacy_safety_check(mut self, legacy: bool) -> Self {
        self.legacy_safety_check = legacy;
        self
    }

    /// The platform native paths follow.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The maximum symlink depth.
    #[must_use]
    pub fn max_symlink_depth(&self) -> usize {
        self.max_symlink_depth
    }

    /// Whether the substring-based safety rule is active.
    #[must_use]
    pub fn legacy_safety_check(&self) -> bool {
        self.legacy_safety_check
    }

    /// See [`normalize::normalize_path`].
    #[must_use]
    pub fn normalize_path(&self, path: &str, kind: PathKind) -> String {
        normalize::normalize_path(path, kind, self.platform)
    }

    /// See [`normalize::from_virtual_path`].
    #[must_use]
    pub fn from_virtual_path(&self, path: &str) -> String {
        normalize::from_virtual_path(path, self.platform)
    }

    /// See [`normalize::ensure_trailing_slash`].
    #[must_use]
    pub fn ensure_trailing_slash(&self, path: &str, kind: PathKind) -> String {
        normalize::ensure_trailing_slash(path, kind, self.platform)
    }

    /// See [`native::is_absolute`].
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        native::is_absolute(path, self.platform)
    }

    /// See [`relationship::relative_to`].
    ///
    /// # Errors
    ///
    /// Returns an error when no relative path exists between the paths.
    pub fn relative_to(&self, base: &str, target: &str) -> Result<String> {
        relationship::relative_to(base, target, self.platform)
    }

    /// See [`relationship::contains_path`].
    #[must_use]
    pub fn contains_path(&self, parent: &str, child: &str) -> bool {
        relationship::contains_path(parent, child, self.platform)
    }

    /// Check a relative path with the configured safety rule.
    #[must_use]
    pub fn validate_path_safety(&self, path: &str) -> bool {
        if self.legacy_safety_check {
            relationship::validate_path_safety_legacy(path, self.platform)
        } else {
            relationship::validate_path_safety(path, self.platform)
        }
    }

    /// See [`windows::strip_drive_letter`].
    #[must_use]
    pub fn strip_drive_letter(&self, path: &str) -> String {
        windows::strip_drive_letter(path, self.platform)
    }

    /// See [`windows::expand_windows_path`].
    #[must_use]
    pub fn expand_windows_path(&self, path: &str) -> String {
        windows::expand_windows_path(path, self.platform)
    }

    /// Expand `%NAME%` tokens from the process environment.
    ///
    /// Only applies on Windows, like [`expand_windows_path`](Self::expand_windows_path).
    /// Variables that are unset are left as they are.
    #[must_use]
    pub fn expand_windows_path_from_env(&self, path: &str) -> String {
        if !self.platform.is_windows() {
            return path.to_string();
        }
        windows::expand_windows_path_with(path, |name| env::var(name).ok())
    }

    /// See [`windows::map_docker_volume`].
    ///
    /// # Errors
    ///
    /// Currently never fails.
    pub fn map_docker_volume(&self, host_path: &str, container_path: &str) -> Result<String> {
        windows::map_docker_volume(host_path, container_path, self.platform)
    }

    /// Resolve symlinks up to the configured depth.
    ///
    /// See [`canonicalize::resolve_symlinks`].
    #[must_use]
    pub fn resolve_symlinks(&self, path: &str) -> String {
        canonicalize::resolve_symlinks(path, self.max_symlink_depth)
    }
}
