//! cmakepilot - Sequential CMake Preset Runner
//!
//! Orchestrates CMake configure/build/clean steps across the build presets
//! declared in `CMakePresets.json` / `CMakeUserPresets.json`:
//!
//! - Presets are selected by the `COPY_BUILD` cache variable of their
//!   configure preset (or all of them with `--all`)
//! - Steps run strictly in order, one child process at a time, and the run
//!   aborts on the first non-zero exit
//! - A `fmt` subcommand sweeps a source tree with clang-format
//!
//! ## Features
//!
//! - XDG-compliant layered settings (cmake command, presets file, formatter)
//! - Preset listing (`--list-only`) and clean-only / skip / rebuild modes
//! - Blocking subprocess execution with inherited output

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod format;
pub mod logging;
pub mod preset;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::Settings;
pub use error::TaskError;
pub use executor::{exec_command, exec_command_sync, ExecOptions, ExecResult};
pub use format::{sweep, SweepOptions, SweepSummary};
pub use preset::{discover_catalog, load_catalog_file, select_build_presets, PresetCatalog};
pub use runner::{CmakeTool, PresetRunner, RunOptions, StepKind};
