//! Configuration system for pathkit.
//!
//! This module provides layered configuration for [`PathToolkit`](crate::PathToolkit):
//! - YAML configuration files
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHKIT_*`)
//! 3. Configuration files, later files first
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathkit::config::ConfigBuilder;
//!
//! let toolkit = ConfigBuilder::new()
//!     .with_file("pathkit.yaml")
//!     .build_toolkit()
//!     .unwrap();
//!
//! println!("resolving symlinks up to {} links deep", toolkit.max_symlink_depth());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::Config;
