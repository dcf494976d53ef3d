// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface
//! for parsing configuration file content in different formats (TOML, INI,
//! YAML, etc.) into the crate's nested mapping model.

use crate::domain::{Mapping, Result};

/// A trait for parsing configuration file content.
///
/// This trait is the seam between the container core and the format-specific
/// parsers: each implementation converts one format's text into a [`Mapping`]
/// from string keys to scalars or nested mappings, or fails with the
/// underlying parser error. The grammar of each format lives entirely behind
/// this trait.
///
/// The [`FileLoader`](crate::adapters::FileLoader) selects a parser by
/// matching a file's extension against [`supported_extensions`]
/// (case-sensitive, exact).
///
/// [`supported_extensions`]: ConfigParser::supported_extensions
///
/// # Examples
///
/// ```rust
/// use nestcfg::ports::ConfigParser;
/// use nestcfg::domain::{Mapping, Result};
///
/// struct MyParser;
///
/// impl ConfigParser for MyParser {
///     fn parse(&self, content: &str) -> Result<Mapping> {
///         // Implementation here
///         Ok(Mapping::new())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["myformat"]
///     }
/// }
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a nested mapping.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(Mapping)` - The parsed configuration tree
    /// * `Err(ConfigError)` - The content is malformed for this format
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use nestcfg::ports::ConfigParser;
    /// # use nestcfg::domain::{Mapping, Result, Value};
    /// # struct MyParser;
    /// # impl ConfigParser for MyParser {
    /// #     fn parse(&self, content: &str) -> Result<Mapping> {
    /// #         let mut mapping = Mapping::new();
    /// #         mapping.insert("key".to_string(), Value::from("value"));
    /// #         Ok(mapping)
    /// #     }
    /// #     fn supported_extensions(&self) -> &[&str] { &["txt"] }
    /// # }
    /// let parser = MyParser;
    /// let mapping = parser.parse("key: value").unwrap();
    /// assert!(mapping.contains_key("key"));
    /// ```
    fn parse(&self, content: &str) -> Result<Mapping>;

    /// Returns the file extensions supported by this parser.
    ///
    /// Extensions are matched case-sensitively and without the leading dot.
    /// This allows the file loader to select the appropriate parser based on
    /// the file extension.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Value;

    // Test implementation of ConfigParser for testing purposes
    struct TestParser;

    impl ConfigParser for TestParser {
        fn parse(&self, _content: &str) -> Result<Mapping> {
            let mut inner = Mapping::new();
            inner.insert("host".to_string(), Value::from("localhost"));

            let mut mapping = Mapping::new();
            mapping.insert("database".to_string(), Value::Mapping(inner));
            Ok(mapping)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let parser = TestParser;
        let mapping = parser.parse("dummy content").unwrap();
        assert_eq!(mapping.len(), 1);

        let nested = mapping.get("database").and_then(Value::as_mapping).unwrap();
        assert_eq!(nested.get("host"), Some(&Value::from("localhost")));
    }

    #[test]
    fn test_parser_supported_extensions() {
        let parser = TestParser;
        let extensions = parser.supported_extensions();
        assert_eq!(extensions, &["test", "tst"]);
    }
}
