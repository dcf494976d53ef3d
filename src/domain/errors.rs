// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when loading and parsing
//! configuration files. All errors use `thiserror` for proper error handling
//! and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when loading or
/// parsing configuration files. It is marked as `#[non_exhaustive]` to allow
/// for future additions without breaking backwards compatibility.
///
/// Read access on a constructed container never produces an error; missing
/// keys are reported as [`ConfigValue::Absent`](crate::domain::ConfigValue).
///
/// # Examples
///
/// ```
/// use nestcfg::domain::ConfigError;
/// use std::path::PathBuf;
///
/// fn load() -> Result<(), ConfigError> {
///     Err(ConfigError::ConfigDoesNotExist {
///         path: PathBuf::from("missing.yml"),
///         source: None,
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested configuration file does not exist or could not be read.
    #[error("configuration file does not exist or is not readable: {path}")]
    ConfigDoesNotExist {
        /// The path that failed to resolve to a readable file
        path: PathBuf,
        /// The underlying I/O error, if the failure came from reading
        #[source]
        source: Option<std::io::Error>,
    },

    /// The file extension matches none of the supported formats.
    #[error("unsupported configuration file type: {extension:?}")]
    UnsupportedConfigFileType {
        /// The offending extension (empty for paths without one)
        extension: String,
    },

    /// The document parsed, but its root is not a mapping.
    #[error("configuration root must be a mapping, found {found}")]
    RootNotMapping {
        /// The kind of value actually found at the root
        found: &'static str,
    },

    /// The TOML parser rejected the file content.
    #[cfg(feature = "toml")]
    #[error("failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The INI parser rejected the file content.
    #[cfg(feature = "ini")]
    #[error("failed to parse INI configuration: {0}")]
    Ini(#[from] ini::ParseError),

    /// The YAML parser rejected the file content.
    #[cfg(feature = "yaml")]
    #[error("failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    /// Creates a `ConfigDoesNotExist` error for a path that failed to resolve.
    pub fn does_not_exist(path: impl Into<PathBuf>) -> Self {
        ConfigError::ConfigDoesNotExist {
            path: path.into(),
            source: None,
        }
    }

    /// Creates a `ConfigDoesNotExist` error carrying the I/O failure that
    /// made the path unreadable.
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ConfigDoesNotExist {
            path: path.into(),
            source: Some(source),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
