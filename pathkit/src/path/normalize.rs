//! Path normalization and format shaping.
//!
//! This module converts between virtual (forward-slash) and native paths,
//! joins and splits virtual paths, and adds or removes trailing separators.

use crate::path::native;
use crate::platform::{PathKind, Platform};

/// Normalize a path for storage or comparison.
///
/// Virtual paths only have their separators converted to `/`; they are not
/// cleaned. Native paths are lexically cleaned with the conventions of
/// `platform`. An empty path stays empty.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::normalize_path;
/// use pathkit::{PathKind, Platform};
///
/// assert_eq!(
///     normalize_path("app\\src\\main.go", PathKind::Virtual, Platform::Posix),
///     "app/src/main.go"
/// );
/// assert_eq!(
///     normalize_path("app/./src/../lib", PathKind::Native, Platform::Posix),
///     "app/lib"
/// );
/// assert_eq!(normalize_path("", PathKind::Native, Platform::Posix), "");
/// ```
#[must_use]
pub fn normalize_path(path: &str, kind: PathKind, platform: Platform) -> String {
    if path.is_empty() {
        return String::new();
    }

    match kind {
        PathKind::Virtual => to_virtual_path(path),
        PathKind::Native => native::clean(path, platform),
    }
}

/// Convert a path to virtual format by replacing every `\` with `/`.
///
/// The conversion is unconditional: paths recorded on Windows hosts are
/// converted even when running elsewhere.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::to_virtual_path;
///
/// assert_eq!(to_virtual_path("C:\\Users\\test\\file.txt"), "C:/Users/test/file.txt");
/// assert_eq!(to_virtual_path("app\\src/main.go"), "app/src/main.go");
/// ```
#[must_use]
pub fn to_virtual_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Convert a virtual path back to the native format of `platform`.
///
/// On Windows every `/` becomes `\`; on posix the path is returned as is.
#[must_use]
pub fn from_virtual_path(path: &str, platform: Platform) -> String {
    match platform {
        Platform::Windows => path.replace('/', "\\"),
        Platform::Posix => path.to_string(),
    }
}

/// Join path elements with forward slashes.
///
/// Each element is converted to virtual format, the elements are joined
/// with `/`, and runs of `/` collapse into one. No elements yields an empty
/// string. The input slice is only borrowed.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::join_virtual;
///
/// assert_eq!(join_virtual(&["app", "src", "main.go"]), "app/src/main.go");
/// assert_eq!(join_virtual(&["app//src", "test"]), "app/src/test");
/// assert_eq!(join_virtual(&["app\\src", "test"]), "app/src/test");
/// assert_eq!(join_virtual::<&str>(&[]), "");
/// ```
#[must_use]
pub fn join_virtual<S: AsRef<str>>(elements: &[S]) -> String {
    let mut joined = String::new();
    let mut last_was_slash = false;

    for (i, element) in elements.iter().enumerate() {
        let separator = if i == 0 { None } else { Some('/') };
        let chars = separator.into_iter().chain(element.as_ref().chars());
        for c in chars {
            let c = if c == '\\' { '/' } else { c };
            if c == '/' {
                if last_was_slash {
                    continue;
                }
                last_was_slash = true;
            } else {
                last_was_slash = false;
            }
            joined.push(c);
        }
    }

    joined
}

/// Split a path into its directory and file name.
///
/// Separators are converted to `/` first; the split happens at the last
/// `/`. Without any separator the directory is empty.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::split_path;
///
/// assert_eq!(split_path("app\\src\\main.go"), ("app/src".to_string(), "main.go".to_string()));
/// assert_eq!(split_path("/main.go"), (String::new(), "main.go".to_string()));
/// assert_eq!(split_path("main.go"), (String::new(), "main.go".to_string()));
/// ```
#[must_use]
pub fn split_path(path: &str) -> (String, String) {
    let path = to_virtual_path(path);
    match path.rfind('/') {
        Some(idx) => (path[..idx].to_string(), path[idx + 1..].to_string()),
        None => (String::new(), path),
    }
}

/// Ensure a directory path ends with a separator.
///
/// Appends `\` for native Windows paths and `/` otherwise, unless the path
/// already ends with that separator. An empty path stays empty.
#[must_use]
pub fn ensure_trailing_slash(path: &str, kind: PathKind, platform: Platform) -> String {
    if path.is_empty() {
        return String::new();
    }

    let separator = if !kind.is_virtual() && platform.is_windows() {
        '\\'
    } else {
        '/'
    };

    let mut out = path.to_string();
    if !out.ends_with(separator) {
        out.push(separator);
    }
    out
}

/// Remove every trailing `/` and `\` from a path.
///
/// An empty path and a lone `/` or `\` are returned unchanged.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::remove_trailing_slash;
///
/// assert_eq!(remove_trailing_slash("app/src///"), "app/src");
/// assert_eq!(remove_trailing_slash("C:\\Users\\"), "C:\\Users");
/// assert_eq!(remove_trailing_slash("/"), "/");
/// ```
#[must_use]
pub fn remove_trailing_slash(path: &str) -> String {
    if path.is_empty() || path == "/" || path == "\\" {
        return path.to_string();
    }
    path.trim_end_matches(['/', '\\']).to_string()
}
