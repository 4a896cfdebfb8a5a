//! Path normalization for inventory records.
//!
//! This module turns paths collected from real filesystems, container
//! images and Windows registries into one consistent representation.
//!
//! # Key Concepts
//!
//! ## Virtual and native paths
//!
//! A *virtual* path always uses forward slashes and is what inventory
//! records store, whichever OS produced them. A *native* path follows the
//! conventions of a [`Platform`](crate::Platform): separators, drive
//! letters and what counts as absolute.
//!
//! ## Explicit platforms
//!
//! Nothing here reads the running OS. Functions whose behavior depends on
//! Windows conventions take a `Platform` argument, and [`PathToolkit`]
//! binds one for repeated use. The lexical primitives they build on live
//! in [`native`].
//!
//! # Examples
//!
//! ```
//! use pathkit::path::normalize::{join_virtual, to_virtual_path};
//! use pathkit::path::relationship::contains_path;
//! use pathkit::Platform;
//!
//! assert_eq!(to_virtual_path("C:\\Users\\test"), "C:/Users/test");
//! assert_eq!(join_virtual(&["app", "src", "main.go"]), "app/src/main.go");
//! assert!(!contains_path("/app", "/app/../etc/passwd", Platform::Posix));
//! ```
//!
//! # Symlinks
//!
//! [`canonicalize::resolve_symlinks`] is the only function that touches the
//! filesystem. It follows a bounded number of links so circular links
//! terminate.

pub mod canonicalize;
pub mod native;
pub mod normalize;
pub mod relationship;
pub mod toolkit;
pub mod windows;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use toolkit::PathToolkit;
