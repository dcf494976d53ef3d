// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture configuration access crate.
//!
//! This crate loads structured configuration data from one or more files
//! (TOML, INI, or YAML), merges them, and exposes the merged result as a
//! read-only, nested, map-like container.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`Config`, `Value`,
//!   `Scalar`, `ConfigValue`, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigParser`)
//! - **Adapters**: Parser implementations for specific file formats and the
//!   file loader that dispatches to them
//!
//! # Features
//!
//! - **Multiple Formats**: TOML, INI, and YAML configuration files
//! - **Multi-File Merging**: Later files' top-level keys override earlier ones
//! - **Nested Access**: Nested mappings are wrapped as fresh containers on
//!   each access
//! - **Read-Only Contract**: Write operations are accepted but never mutate
//! - **Extensible**: Additional formats plug in via the `ConfigParser` trait
//!
//! # Feature Flags
//!
//! - `toml`: Enable TOML file support (default)
//! - `ini`: Enable INI file support (default)
//! - `yaml`: Enable YAML file support (default)
//! - `full`: Enable all formats
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nestcfg::prelude::*;
//!
//! # fn main() -> nestcfg::domain::Result<()> {
//! let config = Config::from_file("config.yml")?;
//!
//! if let Some(cache) = config.get("cache").as_config() {
//!     println!("driver: {:?}", cache.get("driver").as_str());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::FileLoader;
    pub use crate::domain::{Config, ConfigError, ConfigValue, Mapping, Result, Scalar, Value};
    pub use crate::ports::ConfigParser;

    // Re-export parsers based on feature flags
    #[cfg(feature = "ini")]
    pub use crate::adapters::IniParser;
    #[cfg(feature = "toml")]
    pub use crate::adapters::TomlParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
