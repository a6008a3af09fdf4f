//! Property tests for external dependency name normalization.

use proptest::prelude::*;

use component_hint::domain::value_objects::normalize_component_name;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A normalized name is a single directory level.
    #[test]
    fn property_normalized_name_has_no_separators(name in "(?s).{0,64}") {
        let normalized = normalize_component_name(&name);
        prop_assert!(!normalized.contains('/'));
        prop_assert!(!normalized.contains('\\'));
    }

    /// PROPERTY: Normalization is idempotent and keeps the length in chars.
    #[test]
    fn property_normalization_is_idempotent(name in "[a-z0-9/\\\\_.-]{0,32}") {
        let once = normalize_component_name(&name);
        prop_assert_eq!(normalize_component_name(&once), once.clone());
        prop_assert_eq!(once.chars().count(), name.chars().count());
    }
}
