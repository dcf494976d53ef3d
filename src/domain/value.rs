// SPDX-License-Identifier: MIT OR Apache-2.0

//! The raw configuration data model.
//!
//! This module provides the recursive value tree produced by the format
//! parsers: a `Mapping` of string keys to `Value` nodes, where each node is
//! either a `Scalar` leaf or a nested `Mapping`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered mapping from string keys to configuration values.
///
/// Insertion order is preserved and keys are unique. This is the shape every
/// format parser produces and the shape a [`Config`](crate::domain::Config)
/// container wraps.
pub type Mapping = IndexMap<String, Value>;

/// A leaf configuration value.
///
/// Scalars are the terminal values of a configuration tree: strings, numbers,
/// booleans, or an explicit null. They are never mappings.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::Scalar;
///
/// let value = Scalar::from("localhost");
/// assert_eq!(value.as_str(), Some("localhost"));
/// assert_eq!(Scalar::Integer(5432).as_i64(), Some(5432));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A boolean value.
    Bool(bool),
    /// A signed 64-bit integer value.
    Integer(i64),
    /// A 64-bit floating point value.
    Float(f64),
    /// A string value.
    String(String),
    /// An explicit null value.
    Null,
}

impl Scalar {
    /// Returns the string content if this scalar is a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::Scalar;
    ///
    /// assert_eq!(Scalar::from("bar").as_str(), Some("bar"));
    /// assert_eq!(Scalar::Bool(true).as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content if this scalar is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float content if this scalar is a float or an integer.
    ///
    /// Integers are widened so that numeric configuration values can be read
    /// uniformly as floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float(n) => Some(*n),
            Scalar::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the boolean content if this scalar is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` if this scalar is the explicit null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::String(s) => write!(f, "{}", s),
            Scalar::Null => write!(f, "null"),
        }
    }
}

/// A node in the raw configuration tree.
///
/// Every stored configuration value is either a [`Scalar`] leaf or a nested
/// [`Mapping`]. This is the stored representation; read access through a
/// [`Config`](crate::domain::Config) wraps nested mappings into fresh
/// containers instead of handing them out raw.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::{Mapping, Scalar, Value};
///
/// let mut inner = Mapping::new();
/// inner.insert("host".to_string(), Value::from("localhost"));
///
/// let node = Value::Mapping(inner);
/// assert!(node.is_mapping());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A leaf scalar value.
    Scalar(Scalar),
    /// A nested mapping.
    Mapping(Mapping),
}

impl Value {
    /// Returns the scalar if this node is a leaf.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Mapping(_) => None,
        }
    }

    /// Returns the mapping if this node is a nested mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Scalar(_) => None,
            Value::Mapping(m) => Some(m),
        }
    }

    /// Returns `true` if this node is a nested mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(m)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::from(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::from(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_as_str() {
        assert_eq!(Scalar::from("value").as_str(), Some("value"));
        assert_eq!(Scalar::Integer(1).as_str(), None);
        assert_eq!(Scalar::Null.as_str(), None);
    }

    #[test]
    fn test_scalar_as_i64() {
        assert_eq!(Scalar::Integer(42).as_i64(), Some(42));
        assert_eq!(Scalar::from("42").as_i64(), None);
    }

    #[test]
    fn test_scalar_as_f64_widens_integers() {
        assert_eq!(Scalar::Float(3.5).as_f64(), Some(3.5));
        assert_eq!(Scalar::Integer(2).as_f64(), Some(2.0));
        assert_eq!(Scalar::Bool(true).as_f64(), None);
    }

    #[test]
    fn test_scalar_as_bool() {
        assert_eq!(Scalar::Bool(true).as_bool(), Some(true));
        assert_eq!(Scalar::from("true").as_bool(), None);
    }

    #[test]
    fn test_scalar_is_null() {
        assert!(Scalar::Null.is_null());
        assert!(!Scalar::from("").is_null());
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(format!("{}", Scalar::from("text")), "text");
        assert_eq!(format!("{}", Scalar::Integer(7)), "7");
        assert_eq!(format!("{}", Scalar::Bool(false)), "false");
        assert_eq!(format!("{}", Scalar::Null), "null");
    }

    #[test]
    fn test_scalar_equality() {
        assert_eq!(Scalar::from("a"), Scalar::from("a"));
        assert_ne!(Scalar::from("a"), Scalar::from("b"));
        assert_ne!(Scalar::Integer(1), Scalar::Float(1.0));
    }

    #[test]
    fn test_value_as_scalar() {
        let leaf = Value::from("x");
        assert_eq!(leaf.as_scalar(), Some(&Scalar::from("x")));
        assert_eq!(leaf.as_mapping(), None);
    }

    #[test]
    fn test_value_as_mapping() {
        let mut inner = Mapping::new();
        inner.insert("key".to_string(), Value::from("value"));
        let node = Value::Mapping(inner.clone());

        assert!(node.is_mapping());
        assert_eq!(node.as_mapping(), Some(&inner));
        assert_eq!(node.as_scalar(), None);
    }

    #[test]
    fn test_mapping_preserves_insertion_order() {
        let mut mapping = Mapping::new();
        mapping.insert("c".to_string(), Value::from(1));
        mapping.insert("a".to_string(), Value::from(2));
        mapping.insert("b".to_string(), Value::from(3));

        let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_mapping_insert_replaces_in_place() {
        let mut mapping = Mapping::new();
        mapping.insert("a".to_string(), Value::from(1));
        mapping.insert("b".to_string(), Value::from(2));
        mapping.insert("a".to_string(), Value::from(3));

        let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(mapping.get("a"), Some(&Value::from(3)));
    }
}
