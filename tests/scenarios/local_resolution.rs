//! Scenario: Local dependency resolution
//!
//! Journey: a root component pulls in a sibling library through a declared
//! sub-path, then the tree drifts.
//!
//! Steps:
//! 1. The library has a manifest: nothing to report
//! 2. The library's manifest is removed: the dependency is not found
//! 3. A second copy appears on another declared path: the dependency is ambiguous

use std::path::PathBuf;

use component_hint::application::{LintEngine, LintOptions};
use component_hint::infrastructure::LocalFs;

use crate::common::*;
use crate::{assert_exit_code, assert_output_contains};

fn lint(env: &TestEnv, recursive: bool) -> LintEngine<'static> {
    static FS: LocalFs = LocalFs;
    let base = env.project_root.path().canonicalize().unwrap();
    let mut engine = LintEngine::new(&FS, LintOptions::new(base).with_recursive(recursive));
    engine.check_paths(&[PathBuf::from("app")], false);
    engine.post_checks();
    engine
}

#[test]
fn scenario_sibling_library_drifts() {
    let env = TestEnv::new();
    env.write_manifest("app", &local_manifest(&[".."], &["lib_a"]))
        .write_manifest("lib_a", EMPTY_MANIFEST);

    // Step 1
    let engine = lint(&env, true);
    assert_eq!(engine.summary().errors, 0);
    assert!(engine.is_visited(&env.canonical("lib_a")));

    // Step 2
    env.remove_file("lib_a/component.json");
    let engine = lint(&env, true);
    let app = engine.findings().get(&env.canonical("app")).unwrap();
    assert_eq!(
        app.errors,
        vec![
            "Could not find dep \"lib_a\" in any of the given paths".to_string(),
            "Found unused component paths:\n..".to_string(),
        ]
    );
    assert!(!engine.is_visited(&env.canonical("lib_a")));

    // Step 3
    env.write_manifest("lib_a", EMPTY_MANIFEST)
        .write_manifest("vendor/lib_a", EMPTY_MANIFEST)
        .write_manifest("app", &local_manifest(&["..", "../vendor"], &["lib_a"]));
    let engine = lint(&env, true);
    let app = engine.findings().get(&env.canonical("app")).unwrap();
    assert_eq!(app.errors.len(), 1);
    assert!(app.errors[0].starts_with("Found dependency \"lib_a\" in more than one path:"));
    assert!(!engine.is_visited(&env.canonical("lib_a")));
}

#[test]
fn scenario_lookup_paths_hint_where_a_dependency_lives() {
    let env = TestEnv::new();
    env.write_manifest("app", &local_manifest(&[], &["widgets"]))
        .write_manifest("shared/widgets", EMPTY_MANIFEST);

    let result = env.run(&["--lookup-paths", "shared", "app"]);

    assert_exit_code!(result, 1);
    assert_output_contains!(
        result,
        "[error] Could not find dep \"widgets\" in any of the given paths\n  Found it in Lookup Path \"../shared/widgets\""
    );
}

#[test]
fn scenario_dependency_cycle_terminates() {
    let env = TestEnv::new();
    env.write_manifest("app", &local_manifest(&[".."], &["lib"]))
        .write_manifest("lib", &local_manifest(&[".."], &["app"]));

    let result = env.run(&["-r", "app", "lib"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "0 error(s), 0 warning(s) in 2 component(s)");
}

#[test]
fn scenario_non_recursive_run_checks_only_start_paths() {
    let env = TestEnv::new();
    env.write_manifest("app", &local_manifest(&[".."], &["lib"]))
        .write_manifest("lib", SCRIPT_MANIFEST);

    let engine = lint(&env, false);

    assert_eq!(engine.summary().errors, 0);
    assert_eq!(engine.summary().components, 1);
}
