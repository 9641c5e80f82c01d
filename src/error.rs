//! Error types for cmakepilot
//!
//! Provides structured error types with suggestions for common issues.

use thiserror::Error;

/// Main error type for preset and formatter operations
#[derive(Error, Debug)]
pub enum TaskError {
    /// Presets file could not be found
    #[error("Presets file not found: {path}")]
    CatalogNotFound { path: String },

    /// Presets file exists but is not valid JSON for the expected schema
    #[error("Failed to parse presets file {path}: {source}")]
    CatalogParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// External tool (cmake, clang-format) is not on PATH
    #[error("Tool '{tool}' not found on PATH")]
    ToolNotFound {
        tool: String,
        suggestion: Option<String>,
    },

    /// Failed to spawn the command
    #[error("Failed to spawn command: {command}")]
    SpawnFailed { command: String, error: String },

    /// A configure/build/clean step exited non-zero
    #[error("Step '{step}' failed for preset '{preset}'")]
    StepFailed {
        preset: String,
        step: String,
        exit_code: Option<i32>,
    },

    /// Command timed out
    #[error("Command timed out after {timeout_secs}s: {command}")]
    Timeout { command: String, timeout_secs: u64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Suggest an install hint for a missing external tool
pub fn suggest_install(tool: &str) -> Option<String> {
    if tool.contains("cmake") {
        return Some(
            "Install CMake: https://cmake.org/download/ or your system package manager".to_string(),
        );
    }
    if tool.contains("clang-format") {
        return Some("Install clang-format (part of LLVM/Clang tooling)".to_string());
    }
    None
}

/// Suggest fixes for common spawn/step error patterns
pub fn suggest_fix(command: &str, detail: &str) -> Option<String> {
    if detail.contains("Permission denied") {
        return Some(
            "Permission denied. Check file permissions or run with appropriate access.".to_string(),
        );
    }

    if detail.contains("No such file") || detail.contains("not found") {
        if command.contains("cmake") {
            return Some("'cmake' command not found. Install CMake and check PATH.".to_string());
        }
        if command.contains("clang-format") {
            return Some(
                "'clang-format' command not found. Install the LLVM/Clang tooling.".to_string(),
            );
        }
        return Some("Required command not found. Check PATH and dependencies.".to_string());
    }

    if detail.contains("No such preset") || detail.contains("Unknown preset") {
        return Some(
            "Preset not found by CMake. Check CMakePresets.json / CMakeUserPresets.json."
                .to_string(),
        );
    }

    None
}
