// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only configuration container with dotted key access.
//!
//! This module provides the `Config` type, which owns a materialized
//! [`ConfigTree`] and resolves dotted keys against it.

use crate::domain::config_key::ConfigKey;
use crate::domain::config_tree::ConfigTree;
use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};

/// A read-only view over a materialized configuration tree.
///
/// `Config` resolves dotted keys one segment at a time: `database.host`
/// descends into the `database` table and reads its `host` entry. Section
/// names that themselves contain dots (a literal `[a.b]` header) are stored
/// verbatim in the tree and cannot be addressed through dotted lookup.
///
/// # Examples
///
/// ```
/// use inicfg::domain::{Config, ConfigKey, ConfigTree, ConfigValue};
///
/// let mut db = ConfigTree::new();
/// db.insert("host".to_string(), ConfigValue::from("localhost"));
/// let mut tree = ConfigTree::new();
/// tree.insert("database".to_string(), ConfigValue::Table(db));
///
/// let config = Config::new(tree);
/// let host = config.get(&ConfigKey::from("database.host")).unwrap();
/// assert_eq!(host.as_str("database.host").unwrap(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    tree: ConfigTree,
}

impl Config {
    /// Creates a configuration container from a materialized tree.
    pub fn new(tree: ConfigTree) -> Self {
        Config { tree }
    }

    /// Resolves a dotted key and returns the value it addresses.
    ///
    /// Returns [`ConfigError::ConfigKeyNotFound`] if any segment is missing,
    /// or if an intermediate segment resolves to a scalar rather than a
    /// table.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::{Config, ConfigKey, ConfigTree, ConfigValue};
    ///
    /// let mut tree = ConfigTree::new();
    /// tree.insert("timeout".to_string(), ConfigValue::Int(30));
    /// let config = Config::new(tree);
    ///
    /// let value = config.get(&ConfigKey::from("timeout")).unwrap();
    /// assert_eq!(value.as_int("timeout").unwrap(), 30);
    /// assert!(config.get(&ConfigKey::from("missing")).is_err());
    /// ```
    pub fn get(&self, key: &ConfigKey) -> Result<&ConfigValue> {
        let not_found = || ConfigError::ConfigKeyNotFound {
            key: key.as_str().to_string(),
        };

        let mut current = &self.tree;
        let mut segments = key.segments().peekable();
        loop {
            let segment = segments.next().ok_or_else(not_found)?;
            let value = current.get(segment).ok_or_else(not_found)?;
            if segments.peek().is_none() {
                return Ok(value);
            }
            current = match value {
                ConfigValue::Table(table) => table,
                _ => return Err(not_found()),
            };
        }
    }

    /// Resolves a dotted key, falling back to `default` when it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::{Config, ConfigKey, ConfigTree, ConfigValue};
    ///
    /// let config = Config::new(ConfigTree::new());
    /// let value = config.get_or_default(&ConfigKey::from("missing"), ConfigValue::Int(5));
    /// assert_eq!(value, ConfigValue::Int(5));
    /// ```
    pub fn get_or_default(&self, key: &ConfigKey, default: ConfigValue) -> ConfigValue {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Returns `true` if the dotted key resolves to a value.
    pub fn has(&self, key: &ConfigKey) -> bool {
        self.get(key).is_ok()
    }

    /// Returns the underlying tree.
    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    /// Consumes the container and returns the underlying tree.
    pub fn into_tree(self) -> ConfigTree {
        self.tree
    }
}

impl From<ConfigTree> for Config {
    fn from(tree: ConfigTree) -> Self {
        Config::new(tree)
    }
}
