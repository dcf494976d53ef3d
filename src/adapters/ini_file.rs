// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI format parser adapter.
//!
//! This module provides the parser that converts INI documents into the
//! crate's nested mapping model.

use crate::domain::{Mapping, Result, Value};
use crate::ports::ConfigParser;
use ini::Ini;

/// INI parser implementation.
///
/// Sections provide one implicit nesting level: each `[section]` becomes a
/// nested mapping of its properties, while properties that appear before any
/// section header land at the top level. INI carries no type information, so
/// every value stays a string scalar.
///
/// # Examples
///
/// ```rust
/// use nestcfg::adapters::IniParser;
/// use nestcfg::ports::ConfigParser;
/// use nestcfg::domain::Value;
///
/// let parser = IniParser::new();
/// let mapping = parser.parse("[values]\nfoo=bar").unwrap();
/// let values = mapping.get("values").and_then(Value::as_mapping).unwrap();
/// assert_eq!(values.get("foo"), Some(&Value::from("bar")));
/// ```
#[derive(Debug, Clone)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }
}

impl Default for IniParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str) -> Result<Mapping> {
        let doc = Ini::load_from_str(content)?;

        let mut mapping = Mapping::new();
        for (section, properties) in doc.iter() {
            match section {
                None => {
                    for (key, value) in properties.iter() {
                        mapping.insert(key.to_string(), Value::from(value));
                    }
                }
                Some(name) => {
                    let mut section_map = Mapping::new();
                    for (key, value) in properties.iter() {
                        section_map.insert(key.to_string(), Value::from(value));
                    }
                    mapping.insert(name.to_string(), Value::Mapping(section_map));
                }
            }
        }
        Ok(mapping)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;

    #[test]
    fn test_ini_parser_section() {
        let parser = IniParser::new();
        let mapping = parser.parse("[values]\nfoo=bar\n").unwrap();

        let values = mapping.get("values").and_then(Value::as_mapping).unwrap();
        assert_eq!(values.get("foo"), Some(&Value::from("bar")));
    }

    #[test]
    fn test_ini_parser_sectionless_properties_at_top_level() {
        let parser = IniParser::new();
        let mapping = parser.parse("name=app\nversion=1.2\n").unwrap();

        assert_eq!(mapping.get("name"), Some(&Value::from("app")));
        assert_eq!(mapping.get("version"), Some(&Value::from("1.2")));
    }

    #[test]
    fn test_ini_parser_mixed_global_and_sections() {
        let parser = IniParser::new();
        let ini = "debug=true\n[database]\nhost=localhost\nport=5432\n";
        let mapping = parser.parse(ini).unwrap();

        assert_eq!(mapping.get("debug"), Some(&Value::from("true")));

        let database = mapping.get("database").and_then(Value::as_mapping).unwrap();
        assert_eq!(database.get("host"), Some(&Value::from("localhost")));
        // INI is untyped: numbers stay strings.
        assert_eq!(database.get("port"), Some(&Value::from("5432")));
    }

    #[test]
    fn test_ini_parser_multiple_sections() {
        let parser = IniParser::new();
        let ini = "[first]\na=1\n[second]\nb=2\n";
        let mapping = parser.parse(ini).unwrap();

        assert_eq!(mapping.len(), 2);
        assert!(mapping.get("first").is_some_and(Value::is_mapping));
        assert!(mapping.get("second").is_some_and(Value::is_mapping));
    }

    #[test]
    fn test_ini_parser_preserves_section_order() {
        let parser = IniParser::new();
        let ini = "[zebra]\na=1\n[apple]\nb=2\n";
        let mapping = parser.parse(ini).unwrap();

        let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_ini_parser_empty_document() {
        let parser = IniParser::new();
        let mapping = parser.parse("").unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_ini_parser_invalid() {
        let parser = IniParser::new();
        let result = parser.parse("[unclosed\nfoo=bar\n");

        assert!(matches!(result, Err(ConfigError::Ini(_))));
    }

    #[test]
    fn test_ini_parser_supported_extensions() {
        let parser = IniParser::new();
        assert_eq!(parser.supported_extensions(), &["ini"]);
    }
}
