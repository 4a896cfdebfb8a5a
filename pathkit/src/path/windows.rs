//! Windows-specific path handling.
//!
//! Helpers for paths that come out of Windows hosts: drive letters,
//! Docker Desktop volume paths, registry keys, service command lines,
//! environment placeholders and reserved device names. Lookup tables are
//! ordered slices so that the first matching rule always wins.

use crate::error::Result;
use crate::path::normalize::to_virtual_path;
use crate::platform::Platform;

/// Registry root abbreviations and their full key names, in match order.
pub const REGISTRY_ROOTS: &[(&str, &str)] = &[
    ("HKLM\\", "HKEY_LOCAL_MACHINE\\"),
    ("HKCU\\", "HKEY_CURRENT_USER\\"),
    ("HKCR\\", "HKEY_CLASSES_ROOT\\"),
    ("HKU\\", "HKEY_USERS\\"),
    ("HKCC\\", "HKEY_CURRENT_CONFIG\\"),
];

/// Default values used by [`expand_windows_path`], in match order.
pub const DEFAULT_EXPANSIONS: &[(&str, &str)] = &[
    ("%SystemRoot%", "C:\\Windows"),
    ("%ProgramFiles%", "C:\\Program Files"),
    ("%ProgramFiles(x86)%", "C:\\Program Files (x86)"),
    ("%USERPROFILE%", "C:\\Users\\Default"),
    ("%APPDATA%", "C:\\Users\\Default\\AppData\\Roaming"),
    ("%LOCALAPPDATA%", "C:\\Users\\Default\\AppData\\Local"),
    ("%TEMP%", "C:\\Windows\\Temp"),
    ("%WINDIR%", "C:\\Windows"),
];

/// Splits off a leading `X:` drive, if any.
fn split_drive(path: &str) -> Option<(char, &str)> {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        Some((char::from(bytes[0]), &path[2..]))
    } else {
        None
    }
}

/// Remove a leading drive letter, plus one separator after it.
///
/// Only applies on Windows; posix paths are returned unchanged. The drive
/// must be an ASCII letter, so a path like `1:\x` is left alone.
///
/// # Examples
///
/// ```
/// use pathkit::path::windows::strip_drive_letter;
/// use pathkit::Platform;
///
/// assert_eq!(strip_drive_letter("C:\\Users\\test", Platform::Windows), "Users\\test");
/// assert_eq!(strip_drive_letter("C:\\Users\\test", Platform::Posix), "C:\\Users\\test");
/// ```
#[must_use]
pub fn strip_drive_letter(path: &str, platform: Platform) -> String {
    if !platform.is_windows() {
        return path.to_string();
    }

    match split_drive(path) {
        Some((_, rest)) => rest
            .strip_prefix(['\\', '/'])
            .unwrap_or(rest)
            .to_string(),
        None => path.to_string(),
    }
}

/// Map a Windows host path to the form Docker Desktop uses inside WSL2.
///
/// Separators become `/` and a leading `X:` becomes `/x`. Only an ASCII
/// letter counts as a drive; `1:\x` just has its separators converted.
///
/// # Examples
///
/// ```
/// use pathkit::path::windows::map_container_path;
///
/// assert_eq!(map_container_path("C:\\Users\\test"), "/c/Users/test");
/// assert_eq!(map_container_path("/var/lib/docker"), "/var/lib/docker");
/// ```
#[must_use]
pub fn map_container_path(host_path: &str) -> String {
    if host_path.is_empty() {
        return String::new();
    }

    let path = to_virtual_path(host_path);
    match split_drive(&path) {
        Some((drive, rest)) => format!("/{}{rest}", drive.to_ascii_lowercase()),
        None => path,
    }
}

/// Normalize a registry key path.
///
/// Forward slashes become backslashes and a leading root abbreviation
/// (`HKLM\`, `HKCU\`, `HKCR\`, `HKU\`, `HKCC\`) is expanded to the full root
/// key name. At most one abbreviation is replaced.
///
/// # Examples
///
/// ```
/// use pathkit::path::windows::normalize_registry_path;
///
/// assert_eq!(
///     normalize_registry_path("HKLM/Software/Test"),
///     "HKEY_LOCAL_MACHINE\\Software\\Test"
/// );
/// ```
#[must_use]
pub fn normalize_registry_path(reg_path: &str) -> String {
    let reg_path = reg_path.replace('/', "\\");

    for (abbrev, full) in REGISTRY_ROOTS {
        if let Some(rest) = reg_path.strip_prefix(abbrev) {
            return format!("{full}{rest}");
        }
    }

    reg_path
}

/// Extract the executable from a service command line.
///
/// A quoted command yields the text between the first pair of quotes;
/// otherwise the first whitespace-separated token is returned.
///
/// # Examples
///
/// ```
/// use pathkit::path::windows::resolve_windows_service_path;
///
/// assert_eq!(
///     resolve_windows_service_path("\"C:\\Program Files\\Service\\service.exe\" -arg1"),
///     "C:\\Program Files\\Service\\service.exe"
/// );
/// assert_eq!(
///     resolve_windows_service_path("C:\\Windows\\svchost.exe -k netsvcs"),
///     "C:\\Windows\\svchost.exe"
/// );
/// ```
#[must_use]
pub fn resolve_windows_service_path(service_path: &str) -> String {
    if service_path.is_empty() {
        return String::new();
    }

    if let Some(quoted) = service_path.strip_prefix('"') {
        if let Some(end) = quoted.find('"') {
            return quoted[..end].to_string();
        }
    }

    service_path
        .split_whitespace()
        .next()
        .unwrap_or(service_path)
        .to_string()
}

/// Expand well-known environment placeholders to their default values.
///
/// Only applies on Windows. The path is scanned once from left to right;
/// at each `%` the placeholders of [`DEFAULT_EXPANSIONS`] are tried in
/// order and the first match is replaced. Inserted values are never
/// scanned again. Unknown placeholders are left as they are.
///
/// The values are fixed defaults, not the host environment. Use
/// [`expand_windows_path_with`] to resolve against real values.
///
/// # Examples
///
/// ```
/// use pathkit::path::windows::expand_windows_path;
/// use pathkit::Platform;
///
/// assert_eq!(
///     expand_windows_path("%SystemRoot%\\System32", Platform::Windows),
///     "C:\\Windows\\System32"
/// );
/// assert_eq!(
///     expand_windows_path("%SystemRoot%\\System32", Platform::Posix),
///     "%SystemRoot%\\System32"
/// );
/// ```
#[must_use]
pub fn expand_windows_path(path: &str, platform: Platform) -> String {
    if !platform.is_windows() {
        return path.to_string();
    }

    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(idx) = rest.find('%') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];

        match DEFAULT_EXPANSIONS
            .iter()
            .find(|(placeholder, _)| tail.starts_with(placeholder))
        {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            None => {
                out.push('%');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Expand every `%NAME%` token through `lookup`.
///
/// Tokens for which `lookup` returns `None` are kept verbatim, as is a
/// trailing `%` without a partner. Inserted values are not scanned again.
///
/// # Examples
///
/// ```
/// use pathkit::path::windows::expand_windows_path_with;
///
/// let expanded = expand_windows_path_with("%HOMEDRIVE%\\%UNKNOWN%\\x", |name| {
///     (name == "HOMEDRIVE").then(|| "D:".to_string())
/// });
/// assert_eq!(expanded, "D:\\%UNKNOWN%\\x");
/// ```
#[must_use]
pub fn expand_windows_path_with<F>(path: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(len) = after.find('%') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..len];
        match (!name.is_empty()).then(|| lookup(name)).flatten() {
            Some(value) => out.push_str(&value),
            None => {
                out.push('%');
                out.push_str(name);
                out.push('%');
            }
        }
        rest = &after[len + 1..];
    }

    out.push_str(rest);
    out
}

/// Check whether a file name is reserved for a device on Windows.
///
/// The extension (from the last `.`) is ignored and the comparison is
/// case-insensitive, so `com1.txt` is reserved but `CONSOLE.exe` is not.
///
/// # Examples
///
/// ```
/// use pathkit::path::windows::is_windows_reserved_name;
///
/// assert!(is_windows_reserved_name("COM1"));
/// assert!(is_windows_reserved_name("nul.txt"));
/// assert!(!is_windows_reserved_name("CONSOLE.exe"));
/// ```
#[must_use]
pub fn is_windows_reserved_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    let upper = name.to_uppercase();
    let base = upper.rfind('.').map_or(upper.as_str(), |idx| &upper[..idx]);

    matches!(
        base,
        "CON" | "PRN" | "AUX" | "NUL"
            | "COM1" | "COM2" | "COM3" | "COM4" | "COM5" | "COM6" | "COM7" | "COM8" | "COM9"
            | "LPT1" | "LPT2" | "LPT3" | "LPT4" | "LPT5" | "LPT6" | "LPT7" | "LPT8" | "LPT9"
    )
}

/// Map a Docker volume host path for Docker Desktop on Windows.
///
/// An empty host path falls back to `container_path`. On Windows, host
/// paths on the `C:` drive are rewritten to their `/c/...` WSL2 form; every
/// other host path is returned unchanged.
///
/// # Errors
///
/// Currently never fails; the error channel is reserved for validating
/// volume specifications.
#[allow(clippy::unnecessary_wraps)]
pub fn map_docker_volume(
    host_path: &str,
    container_path: &str,
    platform: Platform,
) -> Result<String> {
    if host_path.is_empty() {
        return Ok(container_path.to_string());
    }

    if platform.is_windows() {
        let docker_path = map_container_path(host_path);
        if docker_path.starts_with("/c/") {
            return Ok(docker_path);
        }
    }

    Ok(host_path.to_string())
}
