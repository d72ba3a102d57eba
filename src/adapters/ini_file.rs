// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI file configuration adapter.
//!
//! This module provides the INI text parser and the file adapter that reads
//! an INI file from disk and materializes it into a [`Config`].

use crate::domain::{Config, ConfigError, ConfigTree, ConfigValue, Result};
use crate::materializer::{materialize, RawSource};
use crate::ports::ConfigParser;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for INI configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_INI_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// INI parser implementation.
///
/// This parser tokenizes INI text into a [`RawSource`]: `[section]` headers
/// open sections, `key = value` lines become directives, and lines before any
/// header become bare top-level entries. Values are kept as raw strings;
/// coercion happens later, in the materializer.
///
/// Supported syntax:
///
/// - `;` and `#` start comments, full-line or inline (quote-aware)
/// - single- or double-quoted values have their quotes stripped
/// - `key[] = v` appends under auto-incrementing numeric sub-keys and
///   `key[sub] = v` nests under a named sub-key
///
/// # Examples
///
/// ```rust
/// use inicfg::adapters::IniParser;
/// use inicfg::ports::ConfigParser;
/// use inicfg::domain::ConfigValue;
///
/// let parser = IniParser::new();
/// let source = parser.parse("[database]\nhost = localhost").unwrap();
/// let section = source.get("database").unwrap().as_table("database").unwrap();
/// assert_eq!(section.get("host"), Some(&ConfigValue::from("localhost")));
/// ```
#[derive(Debug, Clone)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }
}

impl Default for IniParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str) -> Result<RawSource> {
        let mut source = RawSource::new();
        let mut current_section: Option<String> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line = strip_inline_comment(raw_line).trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or_else(|| ConfigError::ParseError {
                        message: format!("Unterminated section header on line {}", index + 1),
                        source: None,
                    })?
                    .trim()
                    .to_string();

                // A repeated header reopens the existing section; a header
                // shadowing a bare top-level entry replaces it.
                if !matches!(source.get(&name), Some(ConfigValue::Table(_))) {
                    source.insert(name.clone(), ConfigValue::Table(ConfigTree::new()));
                }
                current_section = Some(name);
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::ParseError {
                message: format!("Expected 'key = value' on line {}", index + 1),
                source: None,
            })?;
            let key = key.trim();
            let value = ConfigValue::from(unquote(value.trim()));

            match &current_section {
                Some(section) => {
                    if let Some(ConfigValue::Table(body)) = source.get_mut(section) {
                        insert_directive(body, key, value);
                    }
                }
                None => match split_bracket_key(key) {
                    Some((base, inner)) => {
                        if !matches!(source.get(base), Some(ConfigValue::Table(_))) {
                            source.insert(base.to_string(), ConfigValue::Table(ConfigTree::new()));
                        }
                        if let Some(ConfigValue::Table(nested)) = source.get_mut(base) {
                            let nested_key = bracket_entry_key(nested, inner);
                            nested.insert(nested_key, value);
                        }
                    }
                    None => {
                        source.insert(key.to_string(), value);
                    }
                },
            }
        }

        Ok(source)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini"]
    }
}

/// Inserts a `key = value` directive into a section body, expanding bracket
/// keys (`list[]`, `map[sub]`) into nested tables.
fn insert_directive(body: &mut ConfigTree, key: &str, value: ConfigValue) {
    match split_bracket_key(key) {
        Some((base, inner)) => {
            if !matches!(body.get(base), Some(ConfigValue::Table(_))) {
                body.insert(base.to_string(), ConfigValue::Table(ConfigTree::new()));
            }
            if let Some(ConfigValue::Table(nested)) = body.get_mut(base) {
                let nested_key = bracket_entry_key(nested, inner);
                nested.insert(nested_key, value);
            }
        }
        None => {
            body.insert(key.to_string(), value);
        }
    }
}

/// Splits `name[inner]` into `("name", Some("inner"))` and `name[]` into
/// `("name", None)`. Returns `None` for keys without bracket syntax.
fn split_bracket_key(key: &str) -> Option<(&str, Option<&str>)> {
    if !key.ends_with(']') {
        return None;
    }
    let open = key.find('[')?;
    let base = key[..open].trim_end();
    let inner = key[open + 1..key.len() - 1].trim();
    if base.is_empty() {
        return None;
    }
    Some((base, if inner.is_empty() { None } else { Some(inner) }))
}

fn bracket_entry_key(nested: &ConfigTree, inner: Option<&str>) -> String {
    match inner {
        Some(name) => name.to_string(),
        None => nested.len().to_string(),
    }
}

/// Truncates a line at the first `;` or `#` that is not inside quotes.
fn strip_inline_comment(line: &str) -> &str {
    let mut in_single = false;
    let mut in_double = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            ';' | '#' if !in_single && !in_double => return &line[..index],
            _ => {}
        }
    }
    line
}

/// Strips one pair of matching single or double quotes from a value.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Configuration adapter for INI files.
///
/// This adapter reads an INI file, parses it into a raw source, materializes
/// the source into a typed tree, and wraps the tree in a [`Config`]. All
/// load failures surface as [`ConfigError::SourceError`] naming the file by
/// base name, before any materialization happens; configuration loading is
/// fail-fast and callers are expected to halt on error.
///
/// # Examples
///
/// ```rust,no_run
/// use inicfg::adapters::IniFileAdapter;
///
/// // Load from a specific file
/// let adapter = IniFileAdapter::from_file("/path/to/config.ini").unwrap();
///
/// // Load from the default OS location
/// let adapter = IniFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct IniFileAdapter {
    /// Path to the INI file
    file_path: PathBuf,
    /// Materialized configuration
    config: Config,
    /// INI parser
    parser: IniParser,
}

impl IniFileAdapter {
    /// Creates a new INI file adapter from a specific file path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the INI file
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use inicfg::adapters::IniFileAdapter;
    ///
    /// let adapter = IniFileAdapter::from_file("/etc/myapp/config.ini").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let parser = IniParser::new();

        // Canonicalize path to prevent directory traversal attacks
        let canonical_path = file_path.canonicalize().map_err(|e| source_error(
            format!(
                "Configuration file {} cannot be loaded",
                base_name(&file_path)
            ),
            Some(Box::new(e)),
        ))?;

        let config = load(&parser, &canonical_path)?;

        Ok(Self {
            file_path: canonical_path,
            config,
            parser,
        })
    }

    /// Creates a new INI file adapter from the default OS-appropriate location.
    ///
    /// This method uses the `directories` crate to determine the appropriate
    /// configuration directory for the current operating system, and loads
    /// `config.ini` from it.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.ini")
    }

    /// Creates a new INI file adapter with a custom file name in the default location.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier
    /// * `filename` - The configuration file name (e.g., "settings.ini")
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            source_error("Failed to determine project directories".to_string(), None)
        })?;

        let config_file = proj_dirs.config_dir().join(filename);
        Self::from_file(config_file)
    }

    /// Returns the materialized configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consumes the adapter and returns the materialized configuration.
    pub fn into_config(self) -> Config {
        self.config
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Re-reads the file and rebuilds the configuration.
    pub fn reload(&mut self) -> Result<()> {
        self.config = load(&self.parser, &self.file_path)?;
        Ok(())
    }
}

fn load(parser: &IniParser, path: &Path) -> Result<Config> {
    // Check file size before reading to prevent DoS via large files
    let metadata = fs::metadata(path).map_err(|e| source_error(
        format!("Failed to read file metadata: {}", base_name(path)),
        Some(Box::new(e)),
    ))?;

    if metadata.len() > MAX_INI_FILE_SIZE {
        return Err(source_error(
            format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_INI_FILE_SIZE
            ),
            None,
        ));
    }

    let content = fs::read_to_string(path).map_err(|e| source_error(
        format!(
            "Configuration file {} cannot be loaded",
            base_name(path)
        ),
        Some(Box::new(e)),
    ))?;

    let source = parser.parse(&content)?;
    tracing::debug!(
        file = %path.display(),
        sections = source.len(),
        "parsed INI configuration"
    );

    Ok(Config::new(materialize(source)))
}

fn source_error(
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
) -> ConfigError {
    ConfigError::SourceError {
        source_name: "ini-file".to_string(),
        message,
        source,
    }
}

fn base_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}
