// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around
//! `String` holding a dotted path such as `database.options.timeout`. The
//! dots denote nesting depth in a [`ConfigTree`](crate::domain::ConfigTree).

use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for dotted configuration keys.
///
/// `ConfigKey` wraps a `String` to provide type safety when addressing into a
/// nested configuration tree. A key like `database.host` names the `host`
/// entry inside the `database` subtree; each `.` descends one level.
///
/// # Examples
///
/// ```
/// use inicfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("database.host");
/// assert_eq!(key.as_str(), "database.host");
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["database", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::new("app.name".to_string());
    /// assert_eq!(key.as_str(), "app.name");
    /// ```
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Iterates over the path segments of the key, one per `.`-separated part.
    ///
    /// Trailing or doubled dots produce empty segments; they are preserved
    /// literally rather than skipped, matching how the materializer splits
    /// dotted keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("database.options.timeout");
    /// let segments: Vec<&str> = key.segments().collect();
    /// assert_eq!(segments, vec!["database", "options", "timeout"]);
    ///
    /// let odd = ConfigKey::from("a.");
    /// assert_eq!(odd.segments().collect::<Vec<_>>(), vec!["a", ""]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
