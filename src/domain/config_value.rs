// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe accessors.
//!
//! This module provides the `ConfigValue` type, which holds a configuration
//! value in its coerced native form and provides type-safe accessors for
//! reading it back out.

use crate::domain::config_tree::ConfigTree;
use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed configuration value.
///
/// Values start out as raw strings in an INI source. The materializer coerces
/// them into this enum: booleans, nulls, integers, floats, strings, or nested
/// tables built from dotted keys. Accessors take the key being read so that
/// type mismatches produce errors naming the offending entry.
///
/// # Examples
///
/// ```
/// use inicfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::Int(42);
/// assert_eq!(value.as_int("test.key").unwrap(), 42);
/// assert!(value.as_bool("test.key").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// An explicit null (`null` in the source, any casing).
    Null,
    /// A boolean (`true`/`yes`/`on` or `false`/`no`/`off` in the source).
    Bool(bool),
    /// An integer (numeric string without a literal `.`).
    Int(i64),
    /// A float (numeric string containing a literal `.`).
    Float(f64),
    /// A string that matched no coercion rule, or a raw uncoerced value.
    Str(String),
    /// A nested tree of further values.
    Table(ConfigTree),
}

impl ConfigValue {
    /// Returns the name of this value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Int(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Str(_) => "string",
            ConfigValue::Table(_) => "table",
        }
    }

    /// Returns `true` if the value is [`ConfigValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Reads the value as a boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::Bool(true);
    /// assert_eq!(value.as_bool("feature.enabled").unwrap(), true);
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self {
            ConfigValue::Bool(b) => Ok(*b),
            other => Err(other.conversion_error(key, "boolean")),
        }
    }

    /// Reads the value as an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::Int(3306);
    /// assert_eq!(value.as_int("database.port").unwrap(), 3306);
    /// ```
    pub fn as_int(&self, key: &str) -> Result<i64> {
        match self {
            ConfigValue::Int(i) => Ok(*i),
            other => Err(other.conversion_error(key, "integer")),
        }
    }

    /// Reads the value as a float.
    ///
    /// Integers widen to floats, since an INI author writing `ratio = 1`
    /// rather than `ratio = 1.0` still means a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::Float(3.14);
    /// assert_eq!(value.as_float("math.pi").unwrap(), 3.14);
    ///
    /// let value = ConfigValue::Int(2);
    /// assert_eq!(value.as_float("math.e").unwrap(), 2.0);
    /// ```
    pub fn as_float(&self, key: &str) -> Result<f64> {
        match self {
            ConfigValue::Float(f) => Ok(*f),
            ConfigValue::Int(i) => Ok(*i as f64),
            other => Err(other.conversion_error(key, "float")),
        }
    }

    /// Reads the value as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("localhost");
    /// assert_eq!(value.as_str("database.host").unwrap(), "localhost");
    /// ```
    pub fn as_str(&self, key: &str) -> Result<&str> {
        match self {
            ConfigValue::Str(s) => Ok(s),
            other => Err(other.conversion_error(key, "string")),
        }
    }

    /// Reads the value as a nested tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_value::ConfigValue;
    /// use inicfg::domain::config_tree::ConfigTree;
    ///
    /// let mut tree = ConfigTree::new();
    /// tree.insert("host".to_string(), ConfigValue::from("localhost"));
    /// let value = ConfigValue::Table(tree);
    /// assert!(value.as_table("database").is_ok());
    /// ```
    pub fn as_table(&self, key: &str) -> Result<&ConfigTree> {
        match self {
            ConfigValue::Table(t) => Ok(t),
            other => Err(other.conversion_error(key, "table")),
        }
    }

    fn conversion_error(&self, key: &str, target_type: &'static str) -> ConfigError {
        ConfigError::TypeConversionError {
            key: key.to_string(),
            target_type,
            actual: self.type_name(),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Str(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<ConfigTree> for ConfigValue {
    fn from(tree: ConfigTree) -> Self {
        ConfigValue::Table(tree)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => write!(f, "null"),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::Str(s) => write!(f, "{}", s),
            ConfigValue::Table(t) => {
                write!(f, "{{")?;
                for (index, (key, value)) in t.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} = {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
