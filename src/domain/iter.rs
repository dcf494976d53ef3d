// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lazy iteration over a container's top-level entries.
//!
//! This module provides `ConfigIter`, the sequence adapter returned by
//! [`Config::iter`](crate::domain::Config::iter). Nested mapping values are
//! wrapped into fresh containers inside `next`, at the moment each entry is
//! produced.

use crate::domain::config_value::ConfigValue;
use crate::domain::value::Value;
use std::iter::FusedIterator;

/// A lazy, single-pass iterator over the entries of a
/// [`Config`](crate::domain::Config).
///
/// Entries are produced in the backing mapping's insertion order. Each
/// nested-mapping value is wrapped into a new container when its entry is
/// yielded, not when the iterator is constructed. The iterator does not
/// rewind; request a fresh one from the container to restart.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::{Config, Mapping, Value};
///
/// let mut mapping = Mapping::new();
/// mapping.insert("name".to_string(), Value::from("app"));
/// let config = Config::new(mapping);
///
/// let entries: Vec<_> = config.iter().collect();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].0, "name");
/// ```
pub struct ConfigIter<'a> {
    entries: indexmap::map::Iter<'a, String, Value>,
}

impl<'a> ConfigIter<'a> {
    pub(crate) fn new(entries: indexmap::map::Iter<'a, String, Value>) -> Self {
        ConfigIter { entries }
    }
}

impl<'a> Iterator for ConfigIter<'a> {
    type Item = (&'a str, ConfigValue);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.entries.next()?;
        Some((key.as_str(), ConfigValue::from_stored(value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for ConfigIter<'_> {}

impl FusedIterator for ConfigIter<'_> {}
