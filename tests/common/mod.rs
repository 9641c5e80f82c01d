//! Common test utilities for cmakepilot integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Sample catalog: two presets with COPY_BUILD enabled (one bool, one
/// string), one without, and one dangling configure-preset reference.
pub const SAMPLE_PRESETS: &str = r#"{
    "version": 4,
    "configurePresets": [
        { "name": "dev", "cacheVariables": { "COPY_BUILD": true } },
        { "name": "rel", "cacheVariables": { "COPY_BUILD": "ON" } },
        { "name": "other", "cacheVariables": { "CMAKE_BUILD_TYPE": "Release" } }
    ],
    "buildPresets": [
        { "name": "dev-build", "configurePreset": "dev" },
        { "name": "rel-build", "configurePreset": "rel" },
        { "name": "other-build", "configurePreset": "other" },
        { "name": "orphan-build", "configurePreset": "missing" }
    ]
}"#;

/// Catalog where no configure preset enables COPY_BUILD
pub const DISABLED_PRESETS: &str = r#"{
    "configurePresets": [
        { "name": "dev", "cacheVariables": { "COPY_BUILD": "OFF" } }
    ],
    "buildPresets": [
        { "name": "dev-build", "configurePreset": "dev" }
    ]
}"#;

/// Creates a temporary project directory containing a CMakeUserPresets.json
pub fn project_with_presets(json: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("CMakeUserPresets.json"), json)
        .expect("Failed to write presets file");
    dir
}

/// Writes a settings file into the directory and returns its path
pub fn write_settings(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, contents).expect("Failed to write settings file");
    path
}

/// Creates a source file (and parent directories) under the directory
pub fn write_source_file(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    std::fs::write(&path, "int main() {}\n").expect("Failed to write source file");
    path
}

/// The cmakepilot binary under test
pub fn cmakepilot() -> Command {
    Command::cargo_bin("cmakepilot").expect("binary should build")
}
