//! Platform and path-kind selection.
//!
//! Operations that behave differently on Windows take a [`Platform`]
//! argument instead of consulting the running OS. This keeps every function
//! deterministic, so Windows behavior can be exercised on a Linux host and
//! the other way around.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The path conventions a native path follows.
///
/// # Examples
///
/// ```
/// use pathkit::Platform;
///
/// assert_eq!(Platform::Windows.separator(), '\\');
/// assert_eq!(Platform::Posix.separator(), '/');
/// assert_eq!(Platform::parse("linux").unwrap(), Platform::Posix);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Unix-like systems: `/` is the only separator, no volumes.
    #[serde(alias = "unix", alias = "linux", alias = "macos")]
    Posix,
    /// Windows: `\` and `/` separate, drive letters and UNC shares are volumes.
    Windows,
}

impl Platform {
    /// The platform this crate was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Returns `true` for [`Platform::Windows`].
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// The preferred separator for native paths.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates path segments on this platform.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// Parses a platform name.
    ///
    /// Recognizes "posix", "unix", "linux", "macos" and "windows"
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "posix" | "unix" | "linux" | "macos" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("invalid platform: {s}")),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Whether a path is a virtual (inventory) path or a native one.
///
/// Virtual paths always use forward slashes regardless of platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// A path in the conventions of the selected [`Platform`].
    Native,
    /// A platform-independent forward-slash path.
    Virtual,
}

impl PathKind {
    /// Returns `true` for [`PathKind::Virtual`].
    #[must_use]
    pub const fn is_virtual(self) -> bool {
        matches!(self, Self::Virtual)
    }
}
