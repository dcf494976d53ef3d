// SPDX-License-Identifier: MIT OR Apache-2.0

//! File loading and multi-file merging.
//!
//! This module provides `FileLoader`, which resolves a file path to a raw
//! [`Mapping`] by dispatching on the file extension, and merges several files
//! into one mapping with later files taking precedence.

use crate::domain::{ConfigError, Mapping, Result};
use crate::ports::ConfigParser;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Resolves configuration file paths to raw mappings.
///
/// A loader holds one parser per supported format and selects among them by
/// the file's extension (case-sensitive, exact match against each parser's
/// [`supported_extensions`](ConfigParser::supported_extensions)). Additional
/// parsers can be registered to extend the supported extension set.
///
/// Loaders hold no state besides their parser registry; file reads are
/// one-shot and nothing is cached between calls.
///
/// # Examples
///
/// ```rust,no_run
/// use nestcfg::adapters::FileLoader;
///
/// # fn main() -> nestcfg::domain::Result<()> {
/// let loader = FileLoader::new();
/// let mapping = loader.load_one("config.yml")?;
/// # Ok(())
/// # }
/// ```
pub struct FileLoader {
    parsers: Vec<Box<dyn ConfigParser>>,
}

impl FileLoader {
    /// Creates a loader with one parser registered per enabled format.
    pub fn new() -> Self {
        let mut parsers: Vec<Box<dyn ConfigParser>> = Vec::new();

        #[cfg(feature = "toml")]
        parsers.push(Box::new(crate::adapters::TomlParser::new()));
        #[cfg(feature = "ini")]
        parsers.push(Box::new(crate::adapters::IniParser::new()));
        #[cfg(feature = "yaml")]
        parsers.push(Box::new(crate::adapters::YamlParser::new()));

        FileLoader { parsers }
    }

    /// Registers an additional parser.
    ///
    /// Parsers are consulted in registration order; the first one whose
    /// extension list contains the file's extension wins.
    pub fn register(&mut self, parser: Box<dyn ConfigParser>) {
        self.parsers.push(parser);
    }

    fn parser_for(&self, extension: &str) -> Option<&dyn ConfigParser> {
        self.parsers
            .iter()
            .find(|parser| parser.supported_extensions().contains(&extension))
            .map(|parser| parser.as_ref())
    }

    /// Loads and parses a single configuration file.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::ConfigDoesNotExist`] if `path` is not an existing,
    ///   readable file
    /// * [`ConfigError::UnsupportedConfigFileType`] if no registered parser
    ///   claims the extension (a path without an extension reports the empty
    ///   string)
    /// * the parser's own error, propagated unchanged, if the content is
    ///   malformed
    pub fn load_one<P: AsRef<Path>>(&self, path: P) -> Result<Mapping> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ConfigError::does_not_exist(path));
        }

        let extension = path.extension().and_then(OsStr::to_str).unwrap_or("");
        let parser = self.parser_for(extension).ok_or_else(|| {
            ConfigError::UnsupportedConfigFileType {
                extension: extension.to_string(),
            }
        })?;

        tracing::debug!(
            "Loading configuration file '{}' as '{}'",
            path.display(),
            extension
        );

        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::unreadable(path, e))?;
        parser.parse(&content)
    }

    /// Loads several configuration files in order and merges them.
    ///
    /// The merge is shallow: a later file's top-level key replaces an earlier
    /// file's same-named key wholesale, nested mappings included. Keys that
    /// appear in only one file are all retained. The first failing path
    /// aborts the whole call; no partial merge is returned.
    pub fn load_many<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Mapping> {
        let mut merged = Mapping::new();
        for path in paths {
            let mapping = self.load_one(path)?;
            for (key, value) in mapping {
                if merged.insert(key.clone(), value).is_some() {
                    tracing::debug!(
                        "Top-level key '{}' overridden by '{}'",
                        key,
                        path.as_ref().display()
                    );
                }
            }
        }
        Ok(merged)
    }
}

impl Default for FileLoader {
    fn default() -> Self {
        Self::new()
    }
}
