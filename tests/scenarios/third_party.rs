//! Scenario: Third-party components
//!
//! Journey: an application depends on installed components under
//! `./components`. Problems inside them should not block the team when
//! `--warn-on-deps` is set, but a broken start path always does.

use crate::common::*;
use crate::{assert_exit_code, assert_output_contains};

#[test]
fn scenario_installed_components_are_found_by_default() {
    let env = TestEnv::new();
    env.write_manifest(
        "app",
        &external_manifest(&[("org/emitter", "1.0.0"), ("org/router", "2.0.0")]),
    )
    .write_manifest("components/org-emitter", EMPTY_MANIFEST)
    .write_manifest("components/org-router", EMPTY_MANIFEST);

    let result = env.run(&["-r", "app"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "in 3 component(s)");
}

#[test]
fn scenario_missing_dependency_without_dep_paths() {
    let env = TestEnv::new();
    env.write_manifest("app", &external_manifest(&[("org/emitter", "1.0.0")]));

    let result = env.run(&["app"]);

    assert_exit_code!(result, 1);
    assert_output_contains!(
        result,
        "[error] Could not find dependency \"org/emitter\" in any of the dependency paths"
    );
}

#[test]
fn scenario_self_dependency() {
    let env = TestEnv::new();
    env.write_manifest(
        "components/org-emitter",
        &external_manifest(&[("org/emitter", "*")]),
    );

    let result = env.run(&["-r", "components/org-emitter"]);

    assert_exit_code!(result, 1);
    assert_output_contains!(result, "[error] \"org/emitter\" contains itself as a dependency");
}

#[test]
fn scenario_broken_dependency_tree_is_a_warning_under_warn_on_deps() {
    let env = TestEnv::new();
    env.write_manifest("app", &external_manifest(&[("org/emitter", "1.0.0")]))
        .write_manifest(
            "components/org-emitter",
            &external_manifest(&[("org/missing", "1.0.0")]),
        );

    let result = env.run(&["-r", "--warn-on-deps", "app"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(
        result,
        "[warning] Could not find dependency \"org/missing\" in any of the dependency paths"
    );
    assert_output_contains!(result, "0 error(s), 1 warning(s)");
}

#[test]
fn scenario_verbose_lists_requiring_components() {
    let env = TestEnv::new();
    env.write_manifest(
        "app",
        r#"{"paths": [".."], "local": ["lib"], "dependencies": {"org/emitter": "1.0.0"}}"#,
    )
    .write_manifest("lib", &external_manifest(&[("org/emitter", "1.1.0")]))
    .write_manifest("components/org-emitter", EMPTY_MANIFEST);

    let result = env.run(&["-r", "-v", "--warn-on-deps", "app"]);

    assert_exit_code!(result, 0);
    let app = env.canonical("app");
    let lib = env.canonical("lib");
    assert_output_contains!(
        result,
        &format!(
            "[warning] Multiple versions of dependency \"org-emitter\" are being required\n  - 1.0.0: 1 instance(s)\n    {}\n  - 1.1.0: 1 instance(s)\n    {}",
            app.display(),
            lib.display()
        )
    );
}
