// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify that coercion,
//! dotted-path splitting, and deep merging hold up under arbitrary inputs.

use inicfg::domain::{ConfigKey, ConfigTree, ConfigValue};
use inicfg::materializer::{build_path, coerce, materialize, RawSource};
use proptest::prelude::*;

// Coercion is idempotent: running it twice is the same as running it once
proptest! {
    #[test]
    fn test_coerce_idempotent(s in "\\PC*") {
        let once = coerce(ConfigValue::from(s));
        let twice = coerce(once.clone());
        prop_assert_eq!(once, twice);
    }
}

// Integer-looking strings always coerce to the same integer
proptest! {
    #[test]
    fn test_integer_strings_coerce(n in prop::num::i64::ANY) {
        let value = coerce(ConfigValue::from(n.to_string()));
        prop_assert_eq!(value, ConfigValue::Int(n));
    }
}

// Strings with no digits, dots, or coercion keywords pass through unchanged
proptest! {
    #[test]
    fn test_plain_words_pass_through(s in "[a-zA-Z_-]{1,20}") {
        prop_assume!(!matches!(
            s.to_lowercase().as_str(),
            "true" | "yes" | "on" | "false" | "no" | "off" | "null"
        ));
        let value = coerce(ConfigValue::from(s.clone()));
        prop_assert_eq!(value, ConfigValue::Str(s));
    }
}

// build_path produces one nesting level per dot in the key
proptest! {
    #[test]
    fn test_build_path_depth_matches_dots(
        segments in prop::collection::vec("[a-z]{1,8}", 1..6)
    ) {
        let dotted = segments.join(".");
        let tree = build_path(&dotted, ConfigValue::from("leaf"));

        let mut current = tree;
        for (i, segment) in segments.iter().enumerate() {
            let value = current.get(segment).cloned();
            prop_assert!(value.is_some(), "missing segment {}", segment);
            if i + 1 == segments.len() {
                prop_assert_eq!(value.unwrap(), ConfigValue::from("leaf"));
            } else {
                match value.unwrap() {
                    ConfigValue::Table(next) => current = next,
                    other => return Err(TestCaseError::fail(
                        format!("expected table at {}, got {:?}", segment, other),
                    )),
                }
            }
        }
    }
}

// Disjoint dotted keys in one section never clobber each other
proptest! {
    #[test]
    fn test_disjoint_keys_all_survive(
        keys in prop::collection::hash_set("[a-d]{1,3}", 1..8)
    ) {
        let directives: ConfigTree = keys
            .iter()
            .map(|k| (k.clone(), ConfigValue::from("v")))
            .collect();

        let mut source = RawSource::new();
        source.insert("section".to_string(), ConfigValue::Table(directives));

        let tree = materialize(source);
        let section = tree.get("section").unwrap().as_table("section").unwrap();
        prop_assert_eq!(section.len(), keys.len());
    }
}

// ConfigKey keeps any string intact
proptest! {
    #[test]
    fn test_config_key_from_any_string(s in "\\PC*") {
        let key = ConfigKey::from(s.clone());
        prop_assert_eq!(key.as_str(), s.as_str());
    }
}

// Splitting a key into segments and rejoining is lossless
proptest! {
    #[test]
    fn test_config_key_segments_roundtrip(s in "[a-z.]{0,20}") {
        let key = ConfigKey::from(s.clone());
        let rejoined = key.segments().collect::<Vec<_>>().join(".");
        prop_assert_eq!(rejoined, s);
    }
}

// Deep merge never loses keys present on either side
proptest! {
    #[test]
    fn test_deep_merge_key_union(
        left in prop::collection::hash_set("[a-f]{1,3}", 0..6),
        right in prop::collection::hash_set("[a-f]{1,3}", 0..6),
    ) {
        let mut a: ConfigTree = left
            .iter()
            .map(|k| (k.clone(), ConfigValue::from("left")))
            .collect();
        let b: ConfigTree = right
            .iter()
            .map(|k| (k.clone(), ConfigValue::from("right")))
            .collect();

        a.deep_merge(b);

        let union: std::collections::HashSet<_> = left.union(&right).cloned().collect();
        prop_assert_eq!(a.len(), union.len());
        for key in &union {
            prop_assert!(a.contains_key(key));
        }
    }
}
