#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! Path string handling for software inventory tools.
//!
//! Inventory collectors see paths from Linux hosts, Windows machines,
//! container images and the Windows registry. This library turns them into
//! one consistent representation and answers the usual questions about
//! them: is one path inside another, is a relative path safe to join, what
//! kind of project does a directory listing describe.
//!
//! ## Core Types
//!
//! - [`Platform`] and [`PathKind`]: Which conventions a path follows
//! - [`PathToolkit`]: Every path operation bound to one platform and settings
//! - [`ProjectType`]: Project ecosystems recognized from manifest files
//! - [`Config`] and [`ConfigBuilder`]: Layered toolkit configuration
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use pathkit::{PathKind, PathToolkit, Platform};
//!
//! let windows = PathToolkit::new().with_platform(Platform::Windows);
//! assert_eq!(windows.normalize_path("C:\\app\\..\\srv\\", PathKind::Native), "C:\\srv");
//! assert_eq!(windows.normalize_path("C:\\srv\\data", PathKind::Virtual), "C:/srv/data");
//! assert!(windows.contains_path("C:\\srv", "c:\\SRV\\data"));
//!
//! let posix = PathToolkit::new().with_platform(Platform::Posix);
//! assert!(!posix.validate_path_safety("../etc/passwd"));
//! assert_eq!(posix.relative_to("/a/b", "/a/c/d").unwrap(), "../c/d");
//! ```

pub mod config;
pub mod error;
pub mod path;
pub mod platform;
pub mod project;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use path::normalize::{join_virtual, remove_trailing_slash, split_path, to_virtual_path};
pub use path::windows::{
    is_windows_reserved_name, map_container_path, normalize_registry_path,
    resolve_windows_service_path,
};
pub use path::PathToolkit;
pub use platform::{PathKind, Platform};
pub use project::{detect_project_type, is_monorepo, ProjectType};
