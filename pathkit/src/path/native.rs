//! Lexical native path algebra.
//!
//! These functions implement the classic path primitives (clean, absolute
//! check, relative path, base name) purely on strings, parameterized by
//! [`Platform`]. Nothing here touches the filesystem, so a Windows path can
//! be cleaned on a Linux host with exactly the result Windows would give.

use crate::error::{Error, Result};
use crate::platform::Platform;

fn is_sep_byte(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

const fn separator_str(platform: Platform) -> &'static str {
    match platform {
        Platform::Posix => "/",
        Platform::Windows => "\\",
    }
}

/// Length in bytes of the leading volume name.
///
/// Volume separators are ASCII, so the returned length is always a char
/// boundary.
fn volume_name_len(path: &str, platform: Platform) -> usize {
    if !platform.is_windows() {
        return 0;
    }

    let bytes = path.as_bytes();

    // Drive letter
    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        return 2;
    }

    // UNC share: \\host\share
    if bytes.len() >= 5
        && is_sep_byte(bytes[0])
        && is_sep_byte(bytes[1])
        && !is_sep_byte(bytes[2])
        && bytes[2] != b'.'
    {
        let Some(host_len) = bytes[3..].iter().position(|&b| is_sep_byte(b)) else {
            return 0;
        };
        let share_start = 3 + host_len + 1;
        if share_start >= bytes.len() || is_sep_byte(bytes[share_start]) {
            return 0;
        }
        return bytes[share_start..]
            .iter()
            .position(|&b| is_sep_byte(b))
            .map_or(bytes.len(), |i| share_start + i);
    }

    0
}

/// Returns the leading volume name of a path.
///
/// On Windows this is a drive letter (`C:`) or a UNC share
/// (`\\host\share`). Posix paths have no volume.
///
/// # Examples
///
/// ```
/// use pathkit::path::native::volume_name;
/// use pathkit::Platform;
///
/// assert_eq!(volume_name("C:\\Windows", Platform::Windows), "C:");
/// assert_eq!(volume_name("\\\\srv\\share\\dir", Platform::Windows), "\\\\srv\\share");
/// assert_eq!(volume_name("C:\\Windows", Platform::Posix), "");
/// ```
#[must_use]
pub fn volume_name(path: &str, platform: Platform) -> &str {
    &path[..volume_name_len(path, platform)]
}

/// Returns the shortest path equivalent to `path` by purely lexical
/// processing.
///
/// Runs of separators collapse into one, `.` segments are dropped, each
/// `name/..` pair is eliminated and `..` directly after a root is dropped.
/// An empty result becomes `"."`. On Windows both separators are accepted,
/// the output uses `\`, and a bare drive (`C:`) cleans to `C:.`.
///
/// # Examples
///
/// ```
/// use pathkit::path::native::clean;
/// use pathkit::Platform;
///
/// assert_eq!(clean("/a/./b/../c//d/", Platform::Posix), "/a/c/d");
/// assert_eq!(clean("../a/..", Platform::Posix), "..");
/// assert_eq!(clean("", Platform::Posix), ".");
/// assert_eq!(clean("C:/Users/../Windows", Platform::Windows), "C:\\Windows");
/// ```
#[must_use]
pub fn clean(path: &str, platform: Platform) -> String {
    let vol_len = volume_name_len(path, platform);
    let (volume, rest) = path.split_at(vol_len);
    let sep = platform.separator();

    if rest.is_empty() {
        if vol_len > 2 {
            // UNC share with nothing after it
            return volume.replace('/', "\\");
        }
        return format!("{volume}.");
    }

    let rooted = rest.starts_with(|c| platform.is_separator(c));
    let mut segments: Vec<&str> = Vec::new();

    for segment in rest.split(|c| platform.is_separator(c)) {
        match segment {
            "" | "." => {}
            ".." => match segments.last().copied() {
                Some(last) if last != ".." => {
                    segments.pop();
                }
                // ".." at the root stays at the root
                _ if rooted => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let mut out = String::with_capacity(path.len());
    if platform.is_windows() {
        out.push_str(&volume.replace('/', "\\"));
    } else {
        out.push_str(volume);
    }
    if rooted {
        out.push(sep);
    }
    out.push_str(&segments.join(separator_str(platform)));
    if !rooted && segments.is_empty() {
        out.push('.');
    }
    out
}

/// Reports whether a path is absolute.
///
/// Posix paths are absolute when they start with `/`. Windows paths need a
/// volume: either a UNC share, or a drive letter followed by a separator.
/// A rooted Windows path without a drive (`\Windows`) is relative to the
/// current drive and therefore not absolute.
///
/// # Examples
///
/// ```
/// use pathkit::path::native::is_absolute;
/// use pathkit::Platform;
///
/// assert!(is_absolute("/etc", Platform::Posix));
/// assert!(is_absolute("C:\\Windows", Platform::Windows));
/// assert!(!is_absolute("\\Windows", Platform::Windows));
/// assert!(!is_absolute("C:Windows", Platform::Windows));
/// ```
#[must_use]
pub fn is_absolute(path: &str, platform: Platform) -> bool {
    match platform {
        Platform::Posix => path.starts_with('/'),
        Platform::Windows => {
            let vol_len = volume_name_len(path, platform);
            if vol_len == 0 {
                return false;
            }
            if vol_len > 2 {
                return true;
            }
            path[vol_len..].starts_with(|c| platform.is_separator(c))
        }
    }
}

/// Returns the last element of a path.
///
/// Both `/` and `\` are treated as separators so that inventory paths
/// recorded on any OS yield the same base name. Trailing separators are
/// ignored. An empty path yields `"."` and a path of only separators
/// yields `"/"`.
///
/// # Examples
///
/// ```
/// use pathkit::path::native::base_name;
///
/// assert_eq!(base_name("frontend/package.json"), "package.json");
/// assert_eq!(base_name("app\\go.mod"), "go.mod");
/// assert_eq!(base_name("dir/"), "dir");
/// ```
#[must_use]
pub fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return "/";
    }
    trimmed
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(trimmed)
}

fn same_word(a: &str, b: &str, platform: Platform) -> bool {
    match platform {
        Platform::Posix => a == b,
        Platform::Windows => a
            .chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase)),
    }
}

/// Returns a relative path that is lexically equivalent to `target` when
/// joined to `base`.
///
/// Both paths are cleaned first. On Windows, segment comparison is
/// case-insensitive.
///
/// # Errors
///
/// Returns [`Error::NoRelativePath`] when the paths are on different
/// volumes, when only one of them is rooted, or when `base` would need to
/// climb through a `..` segment of its own.
///
/// # Examples
///
/// ```
/// use pathkit::path::native::rel;
/// use pathkit::Platform;
///
/// assert_eq!(rel("/a/b", "/a/b/c/d", Platform::Posix).unwrap(), "c/d");
/// assert_eq!(rel("/a/b", "/a/x", Platform::Posix).unwrap(), "../x");
/// assert!(rel("C:\\a", "D:\\a", Platform::Windows).is_err());
/// ```
pub fn rel(base: &str, target: &str, platform: Platform) -> Result<String> {
    let base_vol = volume_name(base, platform);
    let target_vol = volume_name(target, platform);
    let base_clean = clean(base, platform);
    let target_clean = clean(target, platform);

    if same_word(&target_clean, &base_clean, platform) {
        return Ok(".".to_string());
    }

    let sep = separator_str(platform);
    let mut base_rest = &base_clean[base_vol.len()..];
    let mut target_rest = &target_clean[target_vol.len()..];

    if base_rest == "." {
        base_rest = "";
    } else if base_rest.is_empty() && base_vol.len() > 2 {
        // A bare UNC share acts as a root
        base_rest = sep;
    }
    if target_rest == "." {
        target_rest = "";
    }

    let base_rooted = base_rest.starts_with(sep);
    let target_rooted = target_rest.starts_with(sep);
    if base_rooted != target_rooted || !same_word(base_vol, target_vol, platform) {
        return Err(Error::NoRelativePath {
            base: base.to_string(),
            target: target.to_string(),
        });
    }

    let base_parts: Vec<&str> = base_rest.split(sep).filter(|s| !s.is_empty()).collect();
    let target_parts: Vec<&str> = target_rest.split(sep).filter(|s| !s.is_empty()).collect();

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(b, t)| same_word(b, t, platform))
        .count();

    if base_parts.get(common) == Some(&"..") {
        return Err(Error::NoRelativePath {
            base: base.to_string(),
            target: target.to_string(),
        });
    }

    let mut parts = vec![".."; base_parts.len() - common];
    parts.extend_from_slice(&target_parts[common..]);

    if parts.is_empty() {
        return Ok(".".to_string());
    }
    Ok(parts.join(sep))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_name_windows() {
        assert_eq!(volume_name("C:\\Users", Platform::Windows), "C:");
        assert_eq!(volume_name("c:", Platform::Windows), "c:");
        assert_eq!(volume_name("//host/share/x", Platform::Windows), "//host/share");
        assert_eq!(volume_name("\\\\host\\share", Platform::Windows), "\\\\host\\share");
        assert_eq!(volume_name("\\\\host", Platform::Windows), "");
        assert_eq!(volume_name("\\\\host\\", Platform::Windows), "");
        assert_eq!(volume_name("\\Windows", Platform::Windows), "");
        assert_eq!(volume_name("1:\\x", Platform::Windows), "");
    }

    #[test]
    fn test_volume_name_posix_is_empty() {
        assert_eq!(volume_name("C:\\Users", Platform::Posix), "");
        assert_eq!(volume_name("//host/share", Platform::Posix), "");
    }

    #[test]
    fn test_clean_posix() {
        let cases = [
            ("", "."),
            (".", "."),
            ("/", "/"),
            ("//", "/"),
            ("abc", "abc"),
            ("abc/def/", "abc/def"),
            ("a//b", "a/b"),
            ("./a", "a"),
            ("/a/./b/../c", "/a/c"),
            ("/a/b/../../c", "/c"),
            ("/..", "/"),
            ("/../a", "/a"),
            ("..", ".."),
            ("../..", "../.."),
            ("a/..", "."),
            ("a/../..", ".."),
            ("abc/def/../../..", ".."),
            ("../../../etc/passwd", "../../../etc/passwd"),
            ("a\\b", "a\\b"),
        ];
        for (input, expected) in cases {
            assert_eq!(clean(input, Platform::Posix), expected, "clean({input:?})");
        }
    }

    #[test]
    fn test_clean_windows() {
        let cases = [
            ("", "."),
            ("C:", "C:."),
            ("C:\\", "C:\\"),
            ("C:/Users/test", "C:\\Users\\test"),
            ("C:\\Users\\..\\..\\Windows", "C:\\Windows"),
            ("c:a\\..\\..", "c:.."),
            ("\\Windows\\.\\System32", "\\Windows\\System32"),
            ("a/b\\c", "a\\b\\c"),
            ("//host/share", "\\\\host\\share"),
            ("//host/share/a/../b", "\\\\host\\share\\b"),
        ];
        for (input, expected) in cases {
            assert_eq!(clean(input, Platform::Windows), expected, "clean({input:?})");
        }
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/", Platform::Posix));
        assert!(is_absolute("/home/test", Platform::Posix));
        assert!(!is_absolute("home/test", Platform::Posix));
        assert!(!is_absolute("C:\\Users", Platform::Posix));

        assert!(is_absolute("C:\\", Platform::Windows));
        assert!(is_absolute("C:/Users", Platform::Windows));
        assert!(is_absolute("\\\\host\\share", Platform::Windows));
        assert!(!is_absolute("C:", Platform::Windows));
        assert!(!is_absolute("/home/test", Platform::Windows));
        assert!(!is_absolute("Users", Platform::Windows));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(""), ".");
        assert_eq!(base_name("/"), "/");
        assert_eq!(base_name("\\\\"), "/");
        assert_eq!(base_name("package.json"), "package.json");
        assert_eq!(base_name("/srv/app/pom.xml"), "pom.xml");
        assert_eq!(base_name("C:\\src\\Cargo.toml"), "Cargo.toml");
        assert_eq!(base_name("a/b//"), "b");
    }

    #[test]
    fn test_rel_posix() {
        let cases = [
            ("a/b", "a/b", "."),
            ("a/b/.", "a/b", "."),
            ("/a/b", "/a/b/c", "c"),
            ("/a/b", "/a/c", "../c"),
            ("/a/b/c", "/a", "../.."),
            ("/", "/a/b", "a/b"),
            ("/a", "/", ".."),
            (".", "a/b", "a/b"),
            ("a", ".", ".."),
            ("../a", "../b", "../b"),
            ("a/b", "../c", "../../../c"),
        ];
        for (base, target, expected) in cases {
            assert_eq!(
                rel(base, target, Platform::Posix).unwrap(),
                expected,
                "rel({base:?}, {target:?})"
            );
        }
    }

    #[test]
    fn test_rel_posix_errors() {
        assert!(rel("/a", "b", Platform::Posix).is_err());
        assert!(rel("a", "/b", Platform::Posix).is_err());
        assert!(rel("../a", "b", Platform::Posix).is_err());
        assert!(rel("..", "a", Platform::Posix).is_err());
    }

    #[test]
    fn test_rel_windows() {
        assert_eq!(
            rel("C:\\Users", "C:\\Users\\test\\file.txt", Platform::Windows).unwrap(),
            "test\\file.txt"
        );
        assert_eq!(
            rel("C:\\Users\\A", "c:\\users\\b", Platform::Windows).unwrap(),
            "..\\b"
        );
        assert_eq!(rel("C:\\A", "c:\\a", Platform::Windows).unwrap(), ".");
        assert_eq!(
            rel("\\\\host\\share", "\\\\host\\share\\dir", Platform::Windows).unwrap(),
            "dir"
        );

        let err = rel("C:\\a", "D:\\a", Platform::Windows).unwrap_err();
        assert!(err.is_no_relative_path());
        assert!(rel("C:\\a", "C:a", Platform::Windows).is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                Just(".".to_string()),
                Just("..".to_string()),
                Just(String::new()),
                "[a-zA-Z0-9_-]{1,8}",
            ]
        }

        fn path_strategy() -> impl Strategy<Value = String> {
            (any::<bool>(), prop::collection::vec(segment_strategy(), 0..8)).prop_map(
                |(rooted, parts)| {
                    let body = parts.join("/");
                    if rooted {
                        format!("/{body}")
                    } else {
                        body
                    }
                },
            )
        }

        proptest! {
            /// Cleaning twice gives the same result as cleaning once
            #[test]
            fn clean_idempotent_posix(s in path_strategy()) {
                let once = clean(&s, Platform::Posix);
                prop_assert_eq!(clean(&once, Platform::Posix), once);
            }

            #[test]
            fn clean_idempotent_windows(s in path_strategy()) {
                let once = clean(&s, Platform::Windows);
                prop_assert_eq!(clean(&once, Platform::Windows), once);
            }

            /// Rooted paths lose every ".." once cleaned
            #[test]
            fn clean_rooted_has_no_parent_segments(s in path_strategy()) {
                let rooted = format!("/{s}");
                let cleaned = clean(&rooted, Platform::Posix);
                prop_assert!(cleaned.split('/').all(|seg| seg != ".." && seg != "."));
            }

            /// Joining base and rel(base, target) lands on target
            #[test]
            fn rel_round_trips(base in path_strategy(), target in path_strategy()) {
                let base = format!("/{base}");
                let target = format!("/{target}");
                let relative = rel(&base, &target, Platform::Posix).unwrap();
                let joined = clean(&format!("{base}/{relative}"), Platform::Posix);
                prop_assert_eq!(joined, clean(&target, Platform::Posix));
            }
        }
    }
}
