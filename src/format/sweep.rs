//! Formatter sweep
//!
//! Walks the configured root for files with matching extensions
//! (case-insensitive) and invokes the formatter in place on each, waiting
//! for completion before moving on. A failing invocation is logged and
//! counted but never halts the sweep.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{suggest_install, TaskError};
use crate::executor::{exec_command_sync, ExecOptions};

/// Options for a formatter sweep
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Root directory to walk
    pub root: PathBuf,
    /// File extensions to match, case-insensitive
    pub extensions: Vec<String>,
    /// Formatter command, invoked as `<formatter> -i <file>`
    pub formatter: String,
}

/// Counts from a completed sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Files the formatter processed successfully
    pub formatted: usize,
    /// Files where the formatter exited non-zero or could not be spawned
    pub failed: usize,
}

/// Reformat every matching file under the root, in path order.
///
/// Each file path is printed before the formatter runs on it. Only a missing
/// formatter binary is an error; per-file failures are reflected in the
/// summary and the formatter's own output.
pub fn sweep(options: &SweepOptions) -> Result<SweepSummary, TaskError> {
    which::which(&options.formatter).map_err(|_| TaskError::ToolNotFound {
        tool: options.formatter.clone(),
        suggestion: suggest_install(&options.formatter),
    })?;

    let files = collect_files(&options.root, &options.extensions);
    let mut summary = SweepSummary::default();

    for file in files {
        println!("{}", file.display());

        let path = file.to_string_lossy();
        let result = exec_command_sync(
            &options.formatter,
            &["-i", path.as_ref()],
            &ExecOptions::streaming(),
        );

        match result {
            Ok(res) if res.success => summary.formatted += 1,
            Ok(res) => {
                tracing::warn!(
                    file = %file.display(),
                    exit_code = ?res.exit_code,
                    "formatter exited non-zero"
                );
                summary.failed += 1;
            }
            Err(e) => {
                tracing::warn!(file = %file.display(), error = %e, "formatter invocation failed");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Collect matching files under the root, sorted for a deterministic sweep
/// order. A missing root yields an empty list.
fn collect_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if !root.exists() {
        tracing::debug!("Sweep root does not exist: {}", root.display());
        return files;
    }

    for entry in WalkBuilder::new(root).standard_filters(false).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if is_file && matches_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    files
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
