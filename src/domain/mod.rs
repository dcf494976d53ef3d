// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types for the configuration crate:
//! the raw value tree, the read-only container, its access-result type, the
//! entry iterator, and the error types. It is independent of any external
//! concerns and defines the fundamental concepts used throughout the library.

pub mod config;
pub mod config_value;
pub mod errors;
pub mod iter;
pub mod value;

// Re-export commonly used types
pub use config::Config;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use iter::ConfigIter;
pub use value::{Mapping, Scalar, Value};
