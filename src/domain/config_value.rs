// SPDX-License-Identifier: MIT OR Apache-2.0

//! The result type of every read access on a configuration container.
//!
//! This module provides `ConfigValue`, the tagged union returned by
//! [`Config::get`](crate::domain::Config::get) and by iteration: a missing
//! key, a scalar leaf, or a nested container.

use crate::domain::config::Config;
use crate::domain::value::{Scalar, Value};

/// The outcome of reading a key from a [`Config`].
///
/// Reads never fail: a missing key is reported as `Absent`, a scalar value is
/// handed out unchanged, and a nested mapping is wrapped into a fresh
/// [`Config`] at the moment of access.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::{Config, ConfigValue, Mapping, Value};
///
/// let mut mapping = Mapping::new();
/// mapping.insert("foo".to_string(), Value::from("bar"));
/// let config = Config::new(mapping);
///
/// assert_eq!(config.get("foo").as_str(), Some("bar"));
/// assert!(config.get("missing").is_absent());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// The key is not present in the backing mapping.
    Absent,
    /// The key holds a scalar leaf value.
    Scalar(Scalar),
    /// The key holds a nested mapping, wrapped as a fresh container.
    Nested(Config),
}

impl ConfigValue {
    /// Wraps a stored tree node for hand-out, cloning the scalar or minting a
    /// fresh container around a clone of the nested mapping.
    pub(crate) fn from_stored(value: &Value) -> Self {
        match value {
            Value::Scalar(scalar) => ConfigValue::Scalar(scalar.clone()),
            Value::Mapping(mapping) => ConfigValue::Nested(Config::new(mapping.clone())),
        }
    }

    /// Returns `true` if the key was not present.
    pub fn is_absent(&self) -> bool {
        matches!(self, ConfigValue::Absent)
    }

    /// Returns `true` if the key held a scalar value.
    pub fn is_scalar(&self) -> bool {
        matches!(self, ConfigValue::Scalar(_))
    }

    /// Returns `true` if the key held a nested mapping.
    pub fn is_nested(&self) -> bool {
        matches!(self, ConfigValue::Nested(_))
    }

    /// Returns the scalar if the key held one.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            ConfigValue::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the nested container if the key held a mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::{Config, Mapping, Value};
    ///
    /// let mut inner = Mapping::new();
    /// inner.insert("bar".to_string(), Value::from("baz"));
    /// let mut mapping = Mapping::new();
    /// mapping.insert("foo".to_string(), Value::Mapping(inner));
    ///
    /// let config = Config::new(mapping);
    /// let nested = config.get("foo");
    /// assert_eq!(nested.as_config().unwrap().get("bar").as_str(), Some("baz"));
    /// ```
    pub fn as_config(&self) -> Option<&Config> {
        match self {
            ConfigValue::Nested(config) => Some(config),
            _ => None,
        }
    }

    /// Consumes the value and returns the nested container if the key held a
    /// mapping.
    pub fn into_config(self) -> Option<Config> {
        match self {
            ConfigValue::Nested(config) => Some(config),
            _ => None,
        }
    }

    /// Returns the string content if the key held a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Returns the integer content if the key held an integer scalar.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    /// Returns the numeric content if the key held an integer or float scalar.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    /// Returns the boolean content if the key held a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }
}

impl From<Scalar> for ConfigValue {
    fn from(scalar: Scalar) -> Self {
        ConfigValue::Scalar(scalar)
    }
}

impl From<Config> for ConfigValue {
    fn from(config: Config) -> Self {
        ConfigValue::Nested(config)
    }
}
