//! Relationships between paths and traversal safety checks.
//!
//! This module answers whether one path lies inside another and whether a
//! relative path stays inside whatever directory it is later joined to.
//! These checks are lexical heuristics, not a sandbox: callers that need
//! real isolation must also check resolved real paths.

use crate::error::Result;
use crate::path::native;
use crate::platform::Platform;

/// Return the relative path from `base` to `target`.
///
/// # Errors
///
/// Returns [`Error::NoRelativePath`](crate::Error::NoRelativePath) when no
/// relative path exists, for example across Windows drives.
///
/// # Examples
///
/// ```
/// use pathkit::path::relationship::relative_to;
/// use pathkit::Platform;
///
/// assert_eq!(relative_to("/app", "/app/src/main.go", Platform::Posix).unwrap(), "src/main.go");
/// assert!(relative_to("C:\\app", "D:\\app", Platform::Windows).is_err());
/// ```
pub fn relative_to(base: &str, target: &str, platform: Platform) -> Result<String> {
    native::rel(base, target, platform)
}

/// Check whether `child` is `parent` itself or lies beneath it.
///
/// Both paths are cleaned, so `..` segments in `child` cannot smuggle it
/// out of `parent`. Paths with no relative path between them are never
/// contained.
///
/// # Examples
///
/// ```
/// use pathkit::path::relationship::contains_path;
/// use pathkit::Platform;
///
/// assert!(contains_path("/app", "/app/src/main.go", Platform::Posix));
/// assert!(contains_path("/app", "/app", Platform::Posix));
/// assert!(!contains_path("/app", "/app/../etc/passwd", Platform::Posix));
/// ```
#[must_use]
pub fn contains_path(parent: &str, child: &str, platform: Platform) -> bool {
    let parent = native::clean(parent, platform);
    let child = native::clean(child, platform);

    match native::rel(&parent, &child, platform) {
        Ok(rel) => !rel.starts_with(".."),
        Err(e) => {
            log::trace!("{child} is not contained in {parent}: {e}");
            false
        }
    }
}

/// Check that a relative path cannot escape the directory it is joined to.
///
/// The path is cleaned first. It is unsafe when a `..` segment survives
/// cleaning or when the cleaned path is absolute. Only whole `..` segments
/// count, so names such as `report..v2.txt` are accepted.
///
/// # Examples
///
/// ```
/// use pathkit::path::relationship::validate_path_safety;
/// use pathkit::Platform;
///
/// assert!(validate_path_safety("app/src/main.go", Platform::Posix));
/// assert!(validate_path_safety("logs/report..v2.txt", Platform::Posix));
/// assert!(!validate_path_safety("../../../etc/passwd", Platform::Posix));
/// assert!(!validate_path_safety("/etc/passwd", Platform::Posix));
/// ```
#[must_use]
pub fn validate_path_safety(path: &str, platform: Platform) -> bool {
    let cleaned = native::clean(path, platform);

    if cleaned
        .split(|c| platform.is_separator(c))
        .any(|segment| segment == "..")
    {
        return false;
    }

    !native::is_absolute(&cleaned, platform)
}

/// Substring variant of [`validate_path_safety`].
///
/// Rejects any cleaned path containing `..` anywhere, including inside file
/// names like `file..txt`. Use this only where results must match older
/// inventories that were produced with this rule.
#[must_use]
pub fn validate_path_safety_legacy(path: &str, platform: Platform) -> bool {
    let cleaned = native::clean(path, platform);

    if cleaned.contains("..") {
        return false;
    }

    !native::is_absolute(&cleaned, platform)
}
