// SPDX-License-Identifier: MIT OR Apache-2.0

//! The read-only configuration container.
//!
//! This module provides `Config`, the public-facing entity of the crate: an
//! immutable wrapper around one [`Mapping`] with key-based, presence, count,
//! and iteration access. Nested mappings are wrapped into fresh containers on
//! each access, so no shared mutable nested state is ever exposed.

use crate::adapters::FileLoader;
use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::iter::ConfigIter;
use crate::domain::value::{Mapping, Value};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Candidate file names probed by [`Config::from_default_location`], in order.
const DEFAULT_FILE_NAMES: &[&str] = &["config.toml", "config.ini", "config.yml", "config.yaml"];

/// A read-only view over a nested configuration mapping.
///
/// A `Config` wraps exactly one [`Mapping`] and never mutates it after
/// construction. Reads go through [`get`](Config::get), which returns a
/// [`ConfigValue`]: `Absent` for missing keys, the raw scalar for leaf
/// values, and a *new* `Config` for nested mappings.
///
/// Write operations ([`set`](Config::set), [`unset`](Config::unset)) are
/// accepted but have no effect, so the container can stand in for interfaces
/// that nominally support mutation while keeping its read-only contract.
///
/// Two containers compare equal when their backing mappings are structurally
/// equal; no identity semantics apply.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::{Config, Mapping, Value};
///
/// let mut mapping = Mapping::new();
/// mapping.insert("foo".to_string(), Value::from("bar"));
///
/// let config = Config::new(mapping);
/// assert_eq!(config.len(), 1);
/// assert_eq!(config.get("foo").as_str(), Some("bar"));
/// assert!(config.get("missing").is_absent());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    mapping: Mapping,
}

impl Config {
    /// Creates a container wrapping the given mapping.
    ///
    /// The mapping is moved into the container, so later external mutation of
    /// the input cannot affect it.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::{Config, Mapping};
    ///
    /// let config = Config::new(Mapping::new());
    /// assert!(config.is_empty());
    /// ```
    pub fn new(mapping: Mapping) -> Self {
        Config { mapping }
    }

    /// Loads a single configuration file and wraps the result.
    ///
    /// The file format is selected by extension; see
    /// [`FileLoader::load_one`] for the dispatch and failure contract.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::ConfigDoesNotExist`] if the path is not an existing,
    ///   readable file
    /// * [`ConfigError::UnsupportedConfigFileType`] if the extension matches
    ///   no supported format
    /// * the underlying parser error if the content is malformed
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use nestcfg::domain::Config;
    ///
    /// # fn main() -> nestcfg::domain::Result<()> {
    /// let config = Config::from_file("config.yml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let loader = FileLoader::new();
        Ok(Config::new(loader.load_one(path.as_ref())?))
    }

    /// Loads several configuration files in order and wraps the merged result.
    ///
    /// Later files' top-level keys overwrite earlier ones wholesale; the merge
    /// is shallow. The first failing file aborts the whole call.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use nestcfg::domain::Config;
    ///
    /// # fn main() -> nestcfg::domain::Result<()> {
    /// let config = Config::from_files(&["defaults.yml", "local.toml"])?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let loader = FileLoader::new();
        Ok(Config::new(loader.load_many(paths)?))
    }

    /// Loads configuration from the default OS-appropriate location.
    ///
    /// This method uses the `directories` crate to determine the
    /// configuration directory for the current operating system, then probes
    /// `config.toml`, `config.ini`, `config.yml`, and `config.yaml` in that
    /// order and loads the first file that exists.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Errors
    ///
    /// [`ConfigError::ConfigDoesNotExist`] if the project directory cannot be
    /// determined or no candidate file exists there.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use nestcfg::domain::Config;
    ///
    /// # fn main() -> nestcfg::domain::Result<()> {
    /// let config = Config::from_default_location("myapp", "com.example")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let config_dir = Self::default_config_dir(app_name, qualifier)?;
        for name in DEFAULT_FILE_NAMES {
            let candidate = config_dir.join(name);
            if candidate.is_file() {
                return Self::from_file(candidate);
            }
        }
        Err(ConfigError::does_not_exist(config_dir))
    }

    /// Loads a named configuration file from the default OS-appropriate
    /// location.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier
    /// * `filename` - The configuration file name (e.g., "settings.yaml")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use nestcfg::domain::Config;
    ///
    /// # fn main() -> nestcfg::domain::Result<()> {
    /// let config = Config::from_default_file("myapp", "com.example", "settings.yaml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_default_file(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let config_dir = Self::default_config_dir(app_name, qualifier)?;
        Self::from_file(config_dir.join(filename))
    }

    fn default_config_dir(app_name: &str, qualifier: &str) -> Result<std::path::PathBuf> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name)
            .ok_or_else(|| ConfigError::does_not_exist(app_name))?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns [`ConfigValue::Absent`] when the key is missing, the scalar
    /// unchanged when the stored value is a leaf, and a fresh container
    /// wrapping the sub-mapping when the stored value is nested. This single
    /// method is both the attribute-style and the indexed read surface.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::{Config, Mapping, Value};
    ///
    /// let mut inner = Mapping::new();
    /// inner.insert("driver".to_string(), Value::from("filesystem"));
    /// let mut mapping = Mapping::new();
    /// mapping.insert("cache".to_string(), Value::Mapping(inner));
    ///
    /// let config = Config::new(mapping);
    /// let cache = config.get("cache").into_config().unwrap();
    /// assert_eq!(cache.get("driver").as_str(), Some("filesystem"));
    /// ```
    pub fn get(&self, key: &str) -> ConfigValue {
        match self.mapping.get(key) {
            Some(value) => ConfigValue::from_stored(value),
            None => ConfigValue::Absent,
        }
    }

    /// Returns `true` if `key` is present in the backing mapping, regardless
    /// of whether its value is a scalar or a nested mapping.
    pub fn has(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    /// Returns the number of top-level keys.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Returns `true` if the backing mapping has no keys.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Accepts a write and discards it.
    ///
    /// The container is a read-only view; this method exists so the type can
    /// satisfy interfaces that nominally support mutation. It never fails and
    /// never changes observable state.
    pub fn set(&mut self, _key: &str, _value: Value) {}

    /// Accepts a removal and discards it.
    ///
    /// See [`set`](Config::set); the same read-only contract applies.
    pub fn unset(&mut self, _key: &str) {}

    /// Returns the backing mapping, with nested mappings left raw.
    ///
    /// This is the one read surface that exposes un-wrapped nested structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::{Config, Mapping, Value};
    ///
    /// let mut mapping = Mapping::new();
    /// mapping.insert("foo".to_string(), Value::from("bar"));
    ///
    /// let config = Config::new(mapping.clone());
    /// assert_eq!(config.as_mapping(), &mapping);
    /// ```
    pub fn as_mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Consumes the container and returns the backing mapping.
    pub fn into_mapping(self) -> Mapping {
        self.mapping
    }

    /// Returns a lazy iterator over the top-level entries.
    ///
    /// Entries are yielded in the backing mapping's insertion order. Nested
    /// mapping values are wrapped into fresh containers at the moment each
    /// entry is produced, not when the iterator is created. The iterator is
    /// single-pass; request a new one to restart.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::{Config, Mapping, Value};
    ///
    /// let mut mapping = Mapping::new();
    /// mapping.insert("foo".to_string(), Value::from("bar"));
    ///
    /// let config = Config::new(mapping);
    /// for (key, value) in config.iter() {
    ///     println!("{} = {:?}", key, value);
    /// }
    /// ```
    pub fn iter(&self) -> ConfigIter<'_> {
        ConfigIter::new(self.mapping.iter())
    }
}

impl From<Mapping> for Config {
    fn from(mapping: Mapping) -> Self {
        Config::new(mapping)
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a str, ConfigValue);
    type IntoIter = ConfigIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
