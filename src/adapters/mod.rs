// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing format and file implementations.
//!
//! This module contains the concrete INI implementations behind the ports
//! layer: the text parser producing raw sources, and the file adapter that
//! locates, reads, parses, and materializes a configuration file.

pub mod ini_file;

// Re-export adapters
pub use ini_file::{IniFileAdapter, IniParser};
