//! Property tests for model loading on arbitrary input.

use proptest::prelude::*;

use camp::{load_model, CampError};

fn yaml_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z_ ]{0,6}(: )?(\\[ ?[a-z0-9, ]{0,12}\\]|[a-zA-Z0-9{}]{0,8})")
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any input loads, is rejected with warnings, or fails to parse.
    #[test]
    fn property_load_model_never_panics(lines in proptest::collection::vec(yaml_line(), 0..=10)) {
        match load_model(&lines.join("\n")) {
            Ok(_) | Err(CampError::Yaml(_)) => {}
            Err(CampError::InvalidModel { warnings }) => prop_assert!(!warnings.is_empty()),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// PROPERTY: every unknown top-level key costs exactly one warning.
    #[test]
    fn property_unknown_keys_are_counted(keys in proptest::collection::btree_set("x[a-z]{1,6}", 1..=5)) {
        let text: String = keys.iter().map(|key| format!("{}: 1\n", key)).collect();

        let err = load_model(&text).unwrap_err();

        prop_assert_eq!(err.warnings().len(), keys.len());
        prop_assert!(err.warnings().iter().all(|w| w.is_ignored()));
    }
}
