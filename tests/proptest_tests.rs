// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests verify the container's contract over arbitrary configuration
//! trees: counts, absent-key uniformity, access-path round-trips, and the
//! no-op write guarantee.

use nestcfg::domain::{Config, Mapping, Scalar, Value};
use proptest::prelude::*;

// Floats are left out of the generated scalars so equality assertions stay
// exact.
fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<bool>().prop_map(Scalar::Bool),
        any::<i64>().prop_map(Scalar::Integer),
        "[a-z0-9 ]{0,12}".prop_map(Scalar::String),
        Just(Scalar::Null),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = scalar_strategy().prop_map(Value::Scalar);
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(("[a-z]{1,8}", inner), 0..4)
            .prop_map(|entries| Value::Mapping(entries.into_iter().collect()))
    })
}

fn mapping_strategy() -> impl Strategy<Value = Mapping> {
    prop::collection::vec(("[a-z]{1,8}", value_strategy()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_len_matches_mapping_size(m in mapping_strategy()) {
        let config = Config::new(m.clone());
        prop_assert_eq!(config.len(), m.len());
        prop_assert_eq!(config.is_empty(), m.is_empty());
    }

    // Generated keys are lowercase, so an uppercase probe can never collide.
    #[test]
    fn prop_missing_key_is_uniformly_absent(m in mapping_strategy(), k in "[A-Z]{4,8}") {
        let config = Config::new(m);
        prop_assert!(!config.has(&k));
        prop_assert!(config.get(&k).is_absent());
    }

    #[test]
    fn prop_backing_mapping_round_trips(m in mapping_strategy()) {
        let config = Config::new(m.clone());
        prop_assert_eq!(config.as_mapping(), &m);
        prop_assert_eq!(config.into_mapping(), m);
    }

    #[test]
    fn prop_get_matches_stored_kind(m in mapping_strategy()) {
        let config = Config::new(m.clone());
        for (key, stored) in &m {
            prop_assert!(config.has(key));
            let got = config.get(key);
            match stored {
                Value::Scalar(scalar) => {
                    prop_assert_eq!(got.as_scalar(), Some(scalar));
                }
                Value::Mapping(sub) => {
                    let nested = got.as_config().expect("mapping value wraps as container");
                    prop_assert_eq!(nested.as_mapping(), sub);
                    prop_assert_eq!(nested.len(), sub.len());
                }
            }
        }
    }

    #[test]
    fn prop_repeated_access_yields_equal_containers(m in mapping_strategy()) {
        let config = Config::new(m.clone());
        for key in m.keys() {
            prop_assert_eq!(config.get(key), config.get(key));
        }
    }

    #[test]
    fn prop_writes_are_no_ops(
        m in mapping_strategy(),
        k in "[a-z]{1,8}",
        v in scalar_strategy(),
    ) {
        let mut config = Config::new(m.clone());
        let before = config.get(&k);

        config.set(&k, Value::Scalar(v));
        prop_assert_eq!(config.get(&k), before.clone());

        config.unset(&k);
        prop_assert_eq!(config.get(&k), before);

        prop_assert_eq!(config.as_mapping(), &m);
    }

    #[test]
    fn prop_iteration_covers_all_keys_in_order(m in mapping_strategy()) {
        let config = Config::new(m.clone());
        let iterated: Vec<String> = config.iter().map(|(k, _)| k.to_string()).collect();
        let expected: Vec<String> = m.keys().cloned().collect();
        prop_assert_eq!(iterated, expected);
    }

    #[test]
    fn prop_iterated_values_match_get(m in mapping_strategy()) {
        let config = Config::new(m);
        for (key, value) in config.iter() {
            prop_assert_eq!(value, config.get(key));
        }
    }

    #[test]
    fn prop_structural_equality(m in mapping_strategy()) {
        let a = Config::new(m.clone());
        let b = Config::new(m);
        prop_assert_eq!(a, b);
    }
}
