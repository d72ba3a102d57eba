// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture INI configuration crate.
//!
//! This crate reads INI files and materializes them into a nested, typed
//! configuration tree. Flat, section-scoped `key = value` pairs with dotted
//! keys become nested mappings, and raw string values are coerced into
//! native booleans, nulls, integers, and floats.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigValue`, `ConfigTree`, `ConfigKey`,
//!   `Config`, errors)
//! - **Materializer**: The raw-source-to-tree transformation (dotted-path
//!   splitting, deep merge, scalar coercion)
//! - **Ports**: Trait definitions that define interfaces (`ConfigParser`)
//! - **Adapters**: The INI text parser and file adapter
//!
//! # Coercion
//!
//! Raw INI values are strings. During materialization each value is coerced:
//! `true`/`yes`/`on` and `false`/`no`/`off` (case-insensitive) become
//! booleans, `null` becomes a null value, numeric strings become integers or
//! floats, and everything else stays a string.
//!
//! # Quick Start
//!
//! Given a configuration file:
//!
//! ```ini
//! [database]
//! adapter = Mysql
//! host = localhost
//! options.timeout = 30
//! ```
//!
//! You can read it as follows:
//!
//! ```rust,no_run
//! use inicfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let adapter = IniFileAdapter::from_file("path/config.ini")?;
//! let config = adapter.config();
//!
//! let host = config.get(&ConfigKey::from("database.host"))?;
//! assert_eq!(host.as_str("database.host")?, "localhost");
//!
//! let timeout = config.get(&ConfigKey::from("database.options.timeout"))?;
//! assert_eq!(timeout.as_int("database.options.timeout")?, 30);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod materializer;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{IniFileAdapter, IniParser};
    pub use crate::domain::{Config, ConfigError, ConfigKey, ConfigTree, ConfigValue, Result};
    pub use crate::materializer::{coerce, materialize, RawSource};
    pub use crate::ports::ConfigParser;
}
