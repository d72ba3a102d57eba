// SPDX-License-Identifier: MIT OR Apache-2.0

//! Materialization of raw section-oriented sources into typed trees.
//!
//! This module is the core of the crate: it takes the flat, possibly
//! section-scoped key/value mapping produced by an INI reader and converts it
//! into a nested [`ConfigTree`], splitting dotted keys into paths,
//! deep-merging colliding paths, and coercing raw string values into native
//! scalar types.
//!
//! The transformation is total: any well-formed [`RawSource`] materializes
//! without error. Malformed dotted keys (empty segments, trailing dots) are
//! not rejected; they produce the literal tree shapes their splitting
//! implies. The materializer does no I/O and holds no state, so it is safe to
//! call concurrently with distinct inputs.

use crate::domain::config_tree::ConfigTree;
use crate::domain::config_value::ConfigValue;
use indexmap::IndexMap;

/// A raw, section-oriented key/value source, as produced by an INI reader.
///
/// Each entry maps a section name to its body. A body is either a
/// [`ConfigValue::Table`] of dotted-key/raw-value directives (a `[section]`
/// with sub-keys), or a bare scalar (a top-level `key = value` line with no
/// section). Raw values are [`ConfigValue::Str`], except for bracket-key
/// directives (`key[] = v`), which arrive as nested tables of strings.
///
/// Iteration order follows the source file; it is preserved through
/// materialization.
pub type RawSource = IndexMap<String, ConfigValue>;

/// Materializes a raw source into a nested configuration tree.
///
/// For each section with sub-keys, every directive becomes a single-path
/// partial tree via [`build_path`], and the partial trees are deep-merged in
/// encounter order, so `db.host` and `db.port` end up as siblings under `db`
/// while a repeated path lets the later assignment win. Sections with zero
/// sub-keys are omitted entirely. A bare scalar section body is coerced and
/// stored directly under the section name, with no path splitting.
///
/// # Examples
///
/// ```
/// use inicfg::materializer::{materialize, RawSource};
/// use inicfg::domain::{ConfigTree, ConfigValue};
///
/// let mut directives = ConfigTree::new();
/// directives.insert("host".to_string(), ConfigValue::from("localhost"));
/// directives.insert("port".to_string(), ConfigValue::from("3306"));
///
/// let mut source = RawSource::new();
/// source.insert("database".to_string(), ConfigValue::Table(directives));
///
/// let tree = materialize(source);
/// let db = tree.get("database").unwrap().as_table("database").unwrap();
/// assert_eq!(db.get("port"), Some(&ConfigValue::Int(3306)));
/// ```
pub fn materialize(source: RawSource) -> ConfigTree {
    let mut result = ConfigTree::new();

    for (section, body) in source {
        match body {
            ConfigValue::Table(directives) => {
                if directives.is_empty() {
                    tracing::debug!(section = %section, "skipping empty section");
                    continue;
                }
                let mut merged = ConfigTree::new();
                for (path, value) in directives {
                    merged.deep_merge(build_path(&path, value));
                }
                result.insert(section, ConfigValue::Table(merged));
            }
            scalar => {
                result.insert(section, coerce(scalar));
            }
        }
    }

    result
}

/// Builds a single-path partial tree from a dotted key.
///
/// The key is split at its first `.`; the head becomes a table entry wrapping
/// the tree built from the remaining tail, which may itself contain further
/// dots handled by the next recursive call. The value is coerced at the leaf.
/// A key without dots yields a one-entry tree.
///
/// A trailing dot (`"a."`) leaves an empty tail, which becomes a nested tree
/// whose sole key is the empty string. This shape is preserved literally for
/// compatibility with the legacy splitting rule.
///
/// # Examples
///
/// ```
/// use inicfg::materializer::build_path;
/// use inicfg::domain::ConfigValue;
///
/// let tree = build_path("a.b.c", ConfigValue::from("5"));
/// let a = tree.get("a").unwrap().as_table("a").unwrap();
/// let b = a.get("b").unwrap().as_table("a.b").unwrap();
/// assert_eq!(b.get("c"), Some(&ConfigValue::Int(5)));
/// ```
pub fn build_path(dotted_key: &str, value: ConfigValue) -> ConfigTree {
    let value = coerce(value);
    let mut tree = ConfigTree::new();

    match dotted_key.find('.') {
        None => {
            tree.insert(dotted_key.to_string(), value);
        }
        Some(position) => {
            let head = &dotted_key[..position];
            let tail = &dotted_key[position + 1..];
            tree.insert(head.to_string(), ConfigValue::Table(build_path(tail, value)));
        }
    }

    tree
}

/// Coerces a raw value into its inferred native scalar type.
///
/// Tables recurse, coercing every entry while preserving keys and order.
/// Strings are compared case-insensitively against `true`/`yes`/`on`,
/// `false`/`no`/`off`, and `null`; failing that, numeric strings become
/// floats when they contain a literal `.` and integers otherwise; anything
/// else passes through unchanged. Already-coerced scalars are returned as-is,
/// so the function is idempotent.
///
/// The int-vs-float choice is purely syntactic: `"1e10"` contains no `.` and
/// therefore coerces to the integer truncation of its numeric value, not to a
/// float. This matches the legacy rule exactly.
///
/// # Examples
///
/// ```
/// use inicfg::materializer::coerce;
/// use inicfg::domain::ConfigValue;
///
/// assert_eq!(coerce(ConfigValue::from("Yes")), ConfigValue::Bool(true));
/// assert_eq!(coerce(ConfigValue::from("3.14")), ConfigValue::Float(3.14));
/// assert_eq!(coerce(ConfigValue::from("42")), ConfigValue::Int(42));
/// assert_eq!(coerce(ConfigValue::from("hello")), ConfigValue::from("hello"));
/// ```
pub fn coerce(value: ConfigValue) -> ConfigValue {
    match value {
        ConfigValue::Table(table) => ConfigValue::Table(
            table
                .into_iter()
                .map(|(key, value)| (key, coerce(value)))
                .collect(),
        ),
        ConfigValue::Str(raw) => coerce_str(raw),
        already_coerced => already_coerced,
    }
}

fn coerce_str(raw: String) -> ConfigValue {
    match raw.to_lowercase().as_str() {
        "true" | "yes" | "on" => return ConfigValue::Bool(true),
        "false" | "no" | "off" => return ConfigValue::Bool(false),
        "null" => return ConfigValue::Null,
        _ => {}
    }

    if is_numeric(&raw) {
        if raw.contains('.') {
            if let Ok(float) = raw.parse::<f64>() {
                return ConfigValue::Float(float);
            }
        } else if let Ok(int) = raw.parse::<i64>() {
            return ConfigValue::Int(int);
        } else if let Ok(float) = raw.parse::<f64>() {
            // Exponent notation without a literal dot, or an integer string
            // too large for i64: the dotless numeric string still coerces to
            // an integer, truncated.
            return ConfigValue::Int(float as i64);
        }
    }

    ConfigValue::Str(raw)
}

/// Checks a string against the decimal numeric-string grammar: optional
/// sign, digits, optional single `.` with optional fractional digits,
/// optional exponent. At least one digit must appear before the exponent.
fn is_numeric(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let integer_digits = count_digits(&bytes[i..]);
    i += integer_digits;
    let mut has_digits = integer_digits > 0;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let fraction_digits = count_digits(&bytes[i..]);
        i += fraction_digits;
        has_digits |= fraction_digits > 0;
    }

    if !has_digits {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exponent_digits = count_digits(&bytes[i..]);
        if exponent_digits == 0 {
            return false;
        }
        i += exponent_digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
