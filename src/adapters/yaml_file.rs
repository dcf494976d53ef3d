// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML format parser adapter.
//!
//! This module provides the parser that converts YAML documents into the
//! crate's nested mapping model.

use crate::domain::{ConfigError, Mapping, Result, Scalar, Value};
use crate::ports::ConfigParser;

/// YAML parser implementation.
///
/// This parser converts YAML documents into nested [`Mapping`]s. The document
/// root must itself be a mapping; scalar or sequence roots are rejected.
/// Sequences below the root become mappings keyed by decimal index, and
/// mapping keys that are not strings are skipped.
///
/// # Examples
///
/// ```rust
/// use nestcfg::adapters::YamlParser;
/// use nestcfg::ports::ConfigParser;
/// use nestcfg::domain::Value;
///
/// let parser = YamlParser::new();
/// let mapping = parser.parse("cache:\n  driver: filesystem").unwrap();
/// let cache = mapping.get("cache").and_then(Value::as_mapping).unwrap();
/// assert_eq!(cache.get("driver"), Some(&Value::from("filesystem")));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn convert_mapping(map: &serde_yaml::Mapping) -> Mapping {
        let mut result = Mapping::new();
        for (key, value) in map {
            if let Some(key_str) = key.as_str() {
                result.insert(key_str.to_string(), Self::convert_value(value));
            }
        }
        result
    }

    fn convert_sequence(seq: &[serde_yaml::Value]) -> Mapping {
        let mut result = Mapping::new();
        for (i, value) in seq.iter().enumerate() {
            result.insert(i.to_string(), Self::convert_value(value));
        }
        result
    }

    fn convert_value(value: &serde_yaml::Value) -> Value {
        match value {
            serde_yaml::Value::Null => Value::Scalar(Scalar::Null),
            serde_yaml::Value::Bool(b) => Value::Scalar(Scalar::Bool(*b)),
            serde_yaml::Value::Number(n) => Value::Scalar(Self::convert_number(n)),
            serde_yaml::Value::String(s) => Value::Scalar(Scalar::String(s.clone())),
            serde_yaml::Value::Sequence(seq) => Value::Mapping(Self::convert_sequence(seq)),
            serde_yaml::Value::Mapping(map) => Value::Mapping(Self::convert_mapping(map)),
            serde_yaml::Value::Tagged(tagged) => Self::convert_value(&tagged.value),
        }
    }

    fn convert_number(n: &serde_yaml::Number) -> Scalar {
        if let Some(i) = n.as_i64() {
            Scalar::Integer(i)
        } else if let Some(f) = n.as_f64() {
            Scalar::Float(f)
        } else {
            Scalar::String(n.to_string())
        }
    }

    fn kind_name(value: &serde_yaml::Value) -> &'static str {
        match value {
            serde_yaml::Value::Null => "null",
            serde_yaml::Value::Bool(_) => "a boolean",
            serde_yaml::Value::Number(_) => "a number",
            serde_yaml::Value::String(_) => "a string",
            serde_yaml::Value::Sequence(_) => "a sequence",
            serde_yaml::Value::Mapping(_) => "a mapping",
            serde_yaml::Value::Tagged(_) => "a tagged value",
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Mapping> {
        let doc: serde_yaml::Value = serde_yaml::from_str(content)?;

        match doc {
            serde_yaml::Value::Mapping(map) => Ok(Self::convert_mapping(&map)),
            other => Err(ConfigError::RootNotMapping {
                found: Self::kind_name(&other),
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yml", "yaml"]
    }
}
