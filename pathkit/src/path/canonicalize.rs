//! Bounded symlink resolution.
//!
//! Paths are resolved one component at a time, so links in parent
//! directories are followed as well as a link at the end, and a `..` that
//! comes after a link steps out of the link's real target. At most a fixed
//! number of links is followed, so circular links cannot loop forever.
//! Resolution never fails: when a component cannot be read the path built
//! so far is returned.

use std::collections::VecDeque;
use std::fs;
use std::iter;

use crate::path::native;
use crate::platform::Platform;

/// Resolve symlinks in `path`, following at most `max_depth` links.
///
/// Every component is checked in turn. When one is a link its target is
/// spliced into the remaining path; absolute targets restart from their
/// root and relative targets continue from the link's directory. `..` is
/// applied to the real directory reached so far, never lexically to the
/// input.
///
/// A `max_depth` of zero returns the input unchanged. When the link budget
/// runs out, or a component is missing or unreadable, the partly resolved
/// path is returned; if no link was followed yet that is the input itself.
///
/// # Examples
///
/// ```no_run
/// use pathkit::path::canonicalize::resolve_symlinks;
///
/// let resolved = resolve_symlinks("/usr/bin/python3", 40);
/// assert!(!resolved.is_empty());
///
/// assert_eq!(resolve_symlinks("/anything", 0), "/anything");
/// ```
#[must_use]
pub fn resolve_symlinks(path: &str, max_depth: usize) -> String {
    if max_depth == 0 || path.is_empty() {
        return path.to_string();
    }

    let mut walker = LinkWalker::new(path, Platform::current());
    match walker.walk(max_depth) {
        Ok(resolved) => resolved,
        Err(reason) => {
            log::debug!("stopped resolving {path} after {} links: {reason}", walker.hops);
            if walker.hops == 0 {
                path.to_string()
            } else {
                walker.pending()
            }
        }
    }
}

/// State of a component-by-component walk.
struct LinkWalker {
    platform: Platform,
    /// Volume and root separator of the resolved prefix.
    root: String,
    /// Resolved components below `root`. Only leading `..` for relative paths.
    parts: Vec<String>,
    /// Components still to visit.
    rest: VecDeque<String>,
    hops: usize,
}

impl LinkWalker {
    fn new(path: &str, platform: Platform) -> Self {
        let (root, parts) = split_root(path, platform);
        Self {
            platform,
            root,
            parts: Vec::new(),
            rest: parts.into(),
            hops: 0,
        }
    }

    fn walk(&mut self, max_hops: usize) -> Result<String, String> {
        while let Some(part) = self.rest.pop_front() {
            match part.as_str() {
                "." => {}
                ".." => self.parent(),
                _ => {
                    if let Err(reason) = self.step(&part, max_hops) {
                        self.rest.push_front(part);
                        return Err(reason);
                    }
                }
            }
        }

        Ok(native::clean(&self.render(iter::empty()), self.platform))
    }

    /// Visit one ordinary component, following it if it is a link.
    fn step(&mut self, part: &str, max_hops: usize) -> Result<(), String> {
        let candidate = self.render(iter::once(part));
        let meta = fs::symlink_metadata(&candidate)
            .map_err(|e| format!("cannot stat {candidate}: {e}"))?;

        if !meta.file_type().is_symlink() {
            if !meta.is_dir() && !self.rest.is_empty() {
                return Err(format!("{candidate} is not a directory"));
            }
            self.parts.push(part.to_string());
            return Ok(());
        }

        if self.hops == max_hops {
            return Err(format!("link limit reached at {candidate}"));
        }

        let target = fs::read_link(&candidate)
            .map_err(|e| format!("cannot read link {candidate}: {e}"))?;
        let Some(target) = target.to_str() else {
            return Err(format!("link target of {candidate} is not valid UTF-8"));
        };

        self.hops += 1;
        log::debug!("symlink hop {}: {candidate} -> {target}", self.hops);

        let (target_root, target_parts) = split_root(target, self.platform);
        if !target_root.is_empty() {
            self.root = target_root;
            self.parts.clear();
        }
        for target_part in target_parts.into_iter().rev() {
            self.rest.push_front(target_part);
        }
        Ok(())
    }

    fn parent(&mut self) {
        match self.parts.last() {
            Some(last) if last != ".." => {
                self.parts.pop();
            }
            _ if self.root.is_empty() => self.parts.push("..".to_string()),
            // `..` at the root stays at the root
            _ => {}
        }
    }

    /// The resolved prefix joined with the unvisited components.
    fn pending(&self) -> String {
        self.render(self.rest.iter().map(String::as_str))
    }

    fn render<'a>(&'a self, tail: impl Iterator<Item = &'a str>) -> String {
        let mut out = self.root.clone();
        for part in self.parts.iter().map(String::as_str).chain(tail) {
            if out.len() > self.root.len() {
                out.push(self.platform.separator());
            }
            out.push_str(part);
        }
        out
    }
}

/// Split a path into its volume plus root separator and its components.
fn split_root(path: &str, platform: Platform) -> (String, Vec<String>) {
    let volume_len = native::volume_name(path, platform).len();
    let root_len = if path[volume_len..].starts_with(|c| platform.is_separator(c)) {
        volume_len + 1
    } else {
        volume_len
    };

    let parts = path[root_len..]
        .split(|c| platform.is_separator(c))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    (path[..root_len].to_string(), parts)
}
