//! End-to-end CLI tests
//!
//! The external build tool and formatter are stubbed with `true`/`false`
//! through the settings layer, so these tests exercise the real selection,
//! banner and sequencing logic without CMake installed.

mod common;

use common::{
    cmakepilot, project_with_presets, write_settings, write_source_file, DISABLED_PRESETS,
    SAMPLE_PRESETS,
};
use predicates::prelude::*;

/// Settings stubbing cmake with a command that always succeeds
const TRUE_CMAKE: &str = "[cmake]\ncommand = \"true\"\n";

/// Settings stubbing cmake with a command that always fails
const FALSE_CMAKE: &str = "[cmake]\ncommand = \"false\"\n";

#[test]
fn help_exits_zero() {
    cmakepilot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--clean-only"))
        .stdout(predicate::str::contains("--list-only"));
}

#[test]
fn unknown_flag_exits_one_with_usage() {
    cmakepilot()
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn list_only_prints_default_selection() {
    let dir = project_with_presets(SAMPLE_PRESETS);

    cmakepilot()
        .current_dir(dir.path())
        .arg("--list-only")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The following 2 presets will be processed:",
        ))
        .stdout(predicate::str::contains("[1] dev-build"))
        .stdout(predicate::str::contains("[2] rel-build"))
        .stdout(predicate::str::contains("other-build").not())
        .stdout(predicate::str::contains("orphan-build").not());
}

#[test]
fn list_only_with_all_includes_every_preset() {
    let dir = project_with_presets(SAMPLE_PRESETS);

    cmakepilot()
        .current_dir(dir.path())
        .args(["--list-only", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The following 4 presets will be processed:",
        ))
        .stdout(predicate::str::contains("[3] other-build"))
        .stdout(predicate::str::contains("[4] orphan-build"));
}

#[test]
fn empty_selection_reports_and_exits_zero() {
    let dir = project_with_presets(DISABLED_PRESETS);

    cmakepilot()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No build presets available given the current arguments.",
        ));
}

#[test]
fn missing_catalog_exits_one() {
    let dir = tempfile::TempDir::new().unwrap();

    cmakepilot()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Presets file not found"));
}

#[test]
fn run_processes_presets_in_order_with_banners() {
    let dir = project_with_presets(SAMPLE_PRESETS);
    let config = write_settings(dir.path(), TRUE_CMAKE);

    let assert = cmakepilot()
        .current_dir(dir.path())
        .args(["-c", config.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let dev_configure = stdout.find("dev (configure - task 1 of 2)").unwrap();
    let dev_build = stdout.find("dev (build - task 1 of 2)").unwrap();
    let rel_configure = stdout.find("rel (configure - task 2 of 2)").unwrap();
    let rel_build = stdout.find("rel (build - task 2 of 2)").unwrap();
    assert!(dev_configure < dev_build);
    assert!(dev_build < rel_configure);
    assert!(rel_configure < rel_build);
}

#[test]
fn banner_border_matches_message_length() {
    let dir = project_with_presets(SAMPLE_PRESETS);
    let config = write_settings(dir.path(), TRUE_CMAKE);

    let assert = cmakepilot()
        .current_dir(dir.path())
        .args(["-c", config.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let message = "dev (configure - task 1 of 2)";
    let border = "=".repeat(message.chars().count());
    let expected = format!("{border}\n{message}\n{border}");
    assert!(stdout.contains(&expected), "banner missing in: {stdout}");
}

#[test]
fn failing_step_aborts_before_later_presets() {
    let dir = project_with_presets(SAMPLE_PRESETS);
    let config = write_settings(dir.path(), FALSE_CMAKE);

    cmakepilot()
        .current_dir(dir.path())
        .args(["-c", config.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("dev (configure - task 1 of 2)"))
        .stdout(predicate::str::contains("dev (build").not())
        .stdout(predicate::str::contains("rel (").not())
        .stderr(predicate::str::contains("error"));
}

#[test]
fn clean_only_runs_only_clean_steps() {
    let dir = project_with_presets(SAMPLE_PRESETS);
    let config = write_settings(dir.path(), TRUE_CMAKE);

    cmakepilot()
        .current_dir(dir.path())
        .args(["-c", config.to_str().unwrap(), "--clean-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dev (clean - task 1 of 2)"))
        .stdout(predicate::str::contains("rel (clean - task 2 of 2)"))
        .stdout(predicate::str::contains("(configure").not())
        .stdout(predicate::str::contains("(build").not());
}

#[test]
fn skip_flags_drop_their_steps() {
    let dir = project_with_presets(SAMPLE_PRESETS);
    let config = write_settings(dir.path(), TRUE_CMAKE);

    cmakepilot()
        .current_dir(dir.path())
        .args(["-c", config.to_str().unwrap(), "--skip-configure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(configure").not())
        .stdout(predicate::str::contains("dev (build - task 1 of 2)"));
}

#[test]
fn missing_tool_reports_install_hint() {
    let dir = project_with_presets(SAMPLE_PRESETS);
    let config = write_settings(
        dir.path(),
        "[cmake]\ncommand = \"cmake-missing-stub-12345\"\n",
    );

    cmakepilot()
        .current_dir(dir.path())
        .args(["-c", config.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found on PATH"))
        .stderr(predicate::str::contains("Install CMake"));
}

#[test]
fn env_var_overrides_cmake_command() {
    let dir = project_with_presets(SAMPLE_PRESETS);

    cmakepilot()
        .current_dir(dir.path())
        .env("CMAKEPILOT_CMAKE__COMMAND", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("rel (build - task 2 of 2)"));
}

#[test]
fn presets_flag_overrides_discovery() {
    let catalog_dir = project_with_presets(SAMPLE_PRESETS);
    let empty_dir = tempfile::TempDir::new().unwrap();
    let presets_path = catalog_dir.path().join("CMakeUserPresets.json");

    cmakepilot()
        .current_dir(empty_dir.path())
        .args(["--presets", presets_path.to_str().unwrap(), "--list-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] dev-build"));
}

#[test]
fn fmt_sweeps_matching_files_only() {
    let dir = tempfile::TempDir::new().unwrap();
    write_source_file(dir.path(), "src/a.cpp");
    write_source_file(dir.path(), "src/nested/b.HPP");
    write_source_file(dir.path(), "src/readme.txt");

    cmakepilot()
        .current_dir(dir.path())
        .args(["fmt", "--formatter", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.cpp"))
        .stdout(predicate::str::contains("b.HPP"))
        .stdout(predicate::str::contains("readme.txt").not());
}

#[test]
fn fmt_failures_do_not_fail_the_sweep() {
    let dir = tempfile::TempDir::new().unwrap();
    write_source_file(dir.path(), "src/a.cpp");
    write_source_file(dir.path(), "src/b.cpp");

    cmakepilot()
        .current_dir(dir.path())
        .args(["fmt", "--formatter", "false"])
        .assert()
        .success();
}

#[test]
fn fmt_respects_root_and_extension_overrides() {
    let dir = tempfile::TempDir::new().unwrap();
    write_source_file(dir.path(), "lib/a.cc");
    write_source_file(dir.path(), "lib/b.cpp");

    cmakepilot()
        .current_dir(dir.path())
        .args(["fmt", "--formatter", "true", "--root", "lib", "-e", "cc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.cc"))
        .stdout(predicate::str::contains("b.cpp").not());
}
