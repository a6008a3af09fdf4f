//! Property tests for the dependency tie-break.

use proptest::prelude::*;

use component_hint::domain::services::{resolve_in, Resolution};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The outcome depends only on the number of matching roots,
    /// and ambiguous matches keep probe order.
    #[test]
    fn property_tie_break_counts_matches(hits in proptest::collection::vec(any::<bool>(), 0..8)) {
        let matching: Vec<usize> = hits
            .iter()
            .enumerate()
            .filter(|(_, hit)| **hit)
            .map(|(i, _)| i)
            .collect();

        let resolution = resolve_in(0..hits.len(), |i| hits[i].then_some(i));

        match matching.len() {
            0 => prop_assert_eq!(resolution, Resolution::NotFound),
            1 => prop_assert_eq!(resolution, Resolution::Unique(matching[0])),
            _ => prop_assert_eq!(resolution, Resolution::Ambiguous(matching)),
        }
    }
}
