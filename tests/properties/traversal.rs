//! Property tests for graph traversal over real component trees.
//!
//! Components `c0..cN` live side by side and reach each other through
//! `paths: [".."]`, so arbitrary graphs (cycles and diamonds included) can
//! be generated.

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use proptest::prelude::*;

use component_hint::application::{LintEngine, LintOptions};
use component_hint::infrastructure::LocalFs;

fn graph() -> impl Strategy<Value = Vec<BTreeSet<usize>>> {
    (1usize..7).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::btree_set(0..n, 0..n), n)
    })
}

fn reachable(graph: &[BTreeSet<usize>]) -> HashSet<usize> {
    let mut seen = HashSet::new();
    let mut stack = vec![0];
    while let Some(node) = stack.pop() {
        if seen.insert(node) {
            stack.extend(graph[node].iter().copied());
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every reachable component is checked exactly once, whatever
    /// cycles or diamonds the graph contains.
    #[test]
    fn property_each_component_checked_once(graph in graph()) {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().canonicalize().unwrap();

        for (i, deps) in graph.iter().enumerate() {
            let dir = base.join(format!("c{}", i));
            std::fs::create_dir_all(&dir).unwrap();
            let local: Vec<String> = deps.iter().map(|d| format!("c{}", d)).collect();
            let manifest = serde_json::json!({ "paths": [".."], "local": local });
            std::fs::write(dir.join("component.json"), manifest.to_string()).unwrap();
        }

        let fs = LocalFs::new();
        let mut engine = LintEngine::new(&fs, LintOptions::new(base.clone()).with_recursive(true));
        engine.check_paths(&[PathBuf::from("c0")], false);
        engine.post_checks();

        let expected = reachable(&graph);
        let summary = engine.summary();
        prop_assert_eq!(summary.components, expected.len());

        // Only components without dependencies leave `..` unused.
        let leaves = expected.iter().filter(|&&i| graph[i].is_empty()).count();
        prop_assert_eq!(summary.errors, leaves);
        prop_assert_eq!(summary.warnings, 0);

        for i in 0..graph.len() {
            prop_assert_eq!(engine.is_visited(&base.join(format!("c{}", i))), expected.contains(&i));
        }
    }
}
