// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, the seam between a raw
//! configuration text format and the materializer.

use crate::domain::Result;
use crate::materializer::RawSource;

/// A trait for parsing configuration text into a raw section-oriented source.
///
/// Parsers tokenize a configuration format into a [`RawSource`]: an ordered
/// mapping from section name to either a table of dotted-key directives or a
/// bare scalar. Parsers must NOT coerce values; raw strings are handed to the
/// materializer, which owns type inference.
///
/// # Examples
///
/// ```rust
/// use inicfg::ports::ConfigParser;
/// use inicfg::materializer::RawSource;
/// use inicfg::domain::{ConfigValue, Result};
///
/// struct PropertiesParser;
///
/// impl ConfigParser for PropertiesParser {
///     fn parse(&self, content: &str) -> Result<RawSource> {
///         let mut source = RawSource::new();
///         for line in content.lines() {
///             if let Some((key, value)) = line.split_once('=') {
///                 source.insert(key.trim().to_string(), ConfigValue::from(value.trim()));
///             }
///         }
///         Ok(source)
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let source = PropertiesParser.parse("timeout = 30").unwrap();
/// assert_eq!(source.get("timeout"), Some(&ConfigValue::from("30")));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a raw section-oriented source.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(RawSource)` - The tokenized sections and directives
    /// * `Err(ConfigError)` - The content was rejected by the format's grammar
    fn parse(&self, content: &str) -> Result<RawSource>;

    /// Returns the file extensions supported by this parser.
    ///
    /// This allows callers to select the appropriate parser based on the
    /// file extension (without the leading dot).
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigValue;

    // Test implementation of ConfigParser for testing purposes
    struct TestParser;

    impl ConfigParser for TestParser {
        fn parse(&self, _content: &str) -> Result<RawSource> {
            let mut source = RawSource::new();
            source.insert("test.key".to_string(), ConfigValue::from("test.value"));
            Ok(source)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let parser = TestParser;
        let result = parser.parse("dummy content").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.get("test.key"),
            Some(&ConfigValue::from("test.value"))
        );
    }

    #[test]
    fn test_parser_supported_extensions() {
        let parser = TestParser;
        let extensions = parser.supported_extensions();
        assert_eq!(extensions, &["test", "tst"]);
    }
}
