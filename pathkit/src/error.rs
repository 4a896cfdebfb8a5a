//! Error types for the pathkit library.
//!
//! Almost every operation in this crate returns a best-effort fallback
//! instead of failing. The variants here cover the few that can fail:
//! relative path computation, docker volume mapping, and configuration
//! loading.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("app/src".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// No relative path exists between the two paths.
    ///
    /// Raised when the paths live on different volumes, when only one of
    /// them is rooted, or when the base path itself escapes upward.
    #[error("can't make {target} relative to {base}")]
    NoRelativePath {
        /// The base path.
        base: String,
        /// The target path.
        target: String,
    },

    /// An invalid path was provided.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The invalid path.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates that no relative path could be computed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::NoRelativePath {
    ///     base: "C:\\a".to_string(),
    ///     target: "D:\\b".to_string(),
    /// };
    /// assert!(err.is_no_relative_path());
    /// ```
    #[must_use]
    pub fn is_no_relative_path(&self) -> bool {
        matches!(self, Self::NoRelativePath { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_relative_path_error() {
        let err = Error::NoRelativePath {
            base: "C:\\app".to_string(),
            target: "D:\\data".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("can't make"));
        assert!(display.contains("D:\\data"));
        assert!(display.contains("C:\\app"));
        assert!(err.is_no_relative_path());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: "/invalid/path".to_string(),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("does not exist"));
        assert!(!err.is_no_relative_path());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "PATHKIT_PLATFORM".to_string(),
            message: "unknown platform".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("PATHKIT_PLATFORM"));
        assert!(display.contains("unknown platform"));
    }

    #[test]
    fn test_configuration_error_conversion() {
        let yaml_err = serde_yaml::from_str::<u32>("not: a number").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").contains("configuration error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Err(Error::NoRelativePath {
                base: "a".to_string(),
                target: "/b".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
