// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing format parser implementations.
//!
//! This module contains concrete implementations of the `ConfigParser` port
//! for each supported file format, plus the file loader that dispatches a
//! path to the matching parser and merges multi-file loads.

#[cfg(feature = "ini")]
pub mod ini_file;
pub mod loader;
#[cfg(feature = "toml")]
pub mod toml_file;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "ini")]
pub use ini_file::IniParser;
pub use loader::FileLoader;
#[cfg(feature = "toml")]
pub use toml_file::TomlParser;
#[cfg(feature = "yaml")]
pub use yaml_file::YamlParser;
