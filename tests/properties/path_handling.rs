//! Property tests for lexical path arithmetic.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use component_hint::domain::value_objects::path;

fn relative_suffix() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap();
    proptest::collection::vec(segment, 0..=4).prop_map(|segments| segments.join("/"))
}

fn messy_path() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just(String::new()),
        proptest::string::string_regex("[a-z]{1,6}").unwrap(),
    ];
    (any::<bool>(), proptest::collection::vec(segment, 0..=8)).prop_map(|(absolute, segments)| {
        let joined = segments.join("/");
        if absolute {
            format!("/{}", joined)
        } else {
            joined
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalizing twice changes nothing.
    #[test]
    fn property_normalize_is_idempotent(p in messy_path()) {
        let once = path::normalize(Path::new(&p));
        prop_assert_eq!(path::normalize(&once), once.clone());
    }

    /// PROPERTY: Normalized absolute paths keep no `.` or `..` segments.
    #[test]
    fn property_absolute_paths_fold_completely(p in messy_path()) {
        let normalized = path::resolve(Path::new("/repo/app"), Path::new(&p));
        prop_assert!(normalized.is_absolute());
        prop_assert!(!normalized
            .components()
            .any(|c| matches!(c, std::path::Component::CurDir | std::path::Component::ParentDir)));
    }

    /// PROPERTY: `relative_to` undoes `resolve` for downward paths.
    #[test]
    fn property_relative_to_inverts_resolve(suffix in relative_suffix()) {
        let base = Path::new("/repo/app");
        let resolved = path::resolve(base, Path::new(&suffix));

        let expected = if suffix.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&suffix)
        };
        prop_assert_eq!(path::relative_to(base, &resolved), expected);
    }
}
