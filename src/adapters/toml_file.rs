// SPDX-License-Identifier: MIT OR Apache-2.0

//! TOML format parser adapter.
//!
//! This module provides the parser that converts TOML documents into the
//! crate's nested mapping model.

use crate::domain::{Mapping, Result, Scalar, Value};
use crate::ports::ConfigParser;

/// TOML parser implementation.
///
/// A TOML document root is always a table, so no root-kind check is needed.
/// Tables recurse into nested mappings, arrays become mappings keyed by
/// decimal index, and datetime values are carried as their string rendering.
///
/// # Examples
///
/// ```rust
/// use nestcfg::adapters::TomlParser;
/// use nestcfg::ports::ConfigParser;
/// use nestcfg::domain::Value;
///
/// let parser = TomlParser::new();
/// let mapping = parser.parse("foo = \"bar\"").unwrap();
/// assert_eq!(mapping.get("foo"), Some(&Value::from("bar")));
/// ```
#[derive(Debug, Clone)]
pub struct TomlParser;

impl TomlParser {
    /// Creates a new TOML parser.
    pub fn new() -> Self {
        TomlParser
    }

    fn convert_table(table: &toml::Table) -> Mapping {
        let mut result = Mapping::new();
        for (key, value) in table {
            result.insert(key.clone(), Self::convert_value(value));
        }
        result
    }

    fn convert_array(array: &[toml::Value]) -> Mapping {
        let mut result = Mapping::new();
        for (i, value) in array.iter().enumerate() {
            result.insert(i.to_string(), Self::convert_value(value));
        }
        result
    }

    fn convert_value(value: &toml::Value) -> Value {
        match value {
            toml::Value::String(s) => Value::Scalar(Scalar::String(s.clone())),
            toml::Value::Integer(n) => Value::Scalar(Scalar::Integer(*n)),
            toml::Value::Float(n) => Value::Scalar(Scalar::Float(*n)),
            toml::Value::Boolean(b) => Value::Scalar(Scalar::Bool(*b)),
            toml::Value::Datetime(dt) => Value::Scalar(Scalar::String(dt.to_string())),
            toml::Value::Array(array) => Value::Mapping(Self::convert_array(array)),
            toml::Value::Table(table) => Value::Mapping(Self::convert_table(table)),
        }
    }
}

impl Default for TomlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for TomlParser {
    fn parse(&self, content: &str) -> Result<Mapping> {
        let table: toml::Table = toml::from_str(content)?;
        Ok(Self::convert_table(&table))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["toml"]
    }
}
