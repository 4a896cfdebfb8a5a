//! Project type and repository layout heuristics.
//!
//! Detection works on file lists only: each path is reduced to its base
//! name and matched against well-known manifest and workspace files.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::native::base_name;

/// Files whose presence marks a monorepo.
pub const MONOREPO_INDICATORS: &[&str] = &[
    "lerna.json",
    "nx.json",
    "rush.json",
    "pnpm-workspace.yaml",
    "workspace.json",
    ".gitmodules",
];

/// An ecosystem recognized from its manifest file.
///
/// # Examples
///
/// ```
/// use pathkit::ProjectType;
///
/// assert_eq!(ProjectType::from_manifest("go.mod"), Some(ProjectType::Golang));
/// assert_eq!(ProjectType::Golang.to_string(), "golang");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// `package.json`
    Nodejs,
    /// `pom.xml`
    Maven,
    /// `build.gradle`, `build.gradle.kts`
    Gradle,
    /// `Cargo.toml`
    Rust,
    /// `go.mod`
    Golang,
    /// `requirements.txt`, `setup.py`, `pyproject.toml`
    Python,
    /// `composer.json`
    Php,
    /// `Gemfile`
    Ruby,
}

impl ProjectType {
    /// Map a manifest file name to its ecosystem.
    #[must_use]
    pub fn from_manifest(file_name: &str) -> Option<Self> {
        match file_name {
            "package.json" => Some(Self::Nodejs),
            "pom.xml" => Some(Self::Maven),
            "build.gradle" | "build.gradle.kts" => Some(Self::Gradle),
            "Cargo.toml" => Some(Self::Rust),
            "go.mod" => Some(Self::Golang),
            "requirements.txt" | "setup.py" | "pyproject.toml" => Some(Self::Python),
            "composer.json" => Some(Self::Php),
            "Gemfile" => Some(Self::Ruby),
            _ => None,
        }
    }

    /// The lowercase marker name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nodejs => "nodejs",
            Self::Maven => "maven",
            Self::Gradle => "gradle",
            Self::Rust => "rust",
            Self::Golang => "golang",
            Self::Python => "python",
            Self::Php => "php",
            Self::Ruby => "ruby",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the ecosystems present in a list of files.
///
/// Each ecosystem appears once, in the order its first manifest was seen.
///
/// # Examples
///
/// ```
/// use pathkit::project::detect_project_type;
/// use pathkit::ProjectType;
///
/// let types = detect_project_type(&["package.json", "api/pom.xml", "tools/go.mod"]);
/// assert_eq!(types, vec![ProjectType::Nodejs, ProjectType::Maven, ProjectType::Golang]);
/// ```
#[must_use]
pub fn detect_project_type<S: AsRef<str>>(files: &[S]) -> Vec<ProjectType> {
    let mut types = Vec::new();

    for file in files {
        if let Some(project_type) = ProjectType::from_manifest(base_name(file.as_ref())) {
            if !types.contains(&project_type) {
                types.push(project_type);
            }
        }
    }

    types
}

/// Check whether a list of files looks like a monorepo.
///
/// True when any workspace indicator file is present (see
/// [`MONOREPO_INDICATORS`]) or when more than one `package.json` exists.
///
/// # Examples
///
/// ```
/// use pathkit::project::is_monorepo;
///
/// assert!(is_monorepo(&["package.json", "frontend/package.json"]));
/// assert!(is_monorepo(&["nx.json"]));
/// assert!(!is_monorepo(&["package.json"]));
/// ```
#[must_use]
pub fn is_monorepo<S: AsRef<str>>(files: &[S]) -> bool {
    let mut package_json_count = 0;

    for file in files {
        let base = base_name(file.as_ref());
        if MONOREPO_INDICATORS.iter().any(|&indicator| indicator == base) {
            return true;
        }
        if base == "package.json" {
            package_json_count += 1;
        }
    }

    package_json_count > 1
}
