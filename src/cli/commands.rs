//! CLI definitions using clap
//!
//! All preset-runner flags live on the top-level command; conflicting flags
//! are resolved by the runner in a fixed priority order (help > list-only >
//! clean-only > skip-* > rebuild).

use clap::{Parser, Subcommand};

use crate::runner::RunOptions;

/// Sequential CMake preset runner.
///
/// Loads the preset catalog (CMakePresets.json / CMakeUserPresets.json),
/// selects build presets, and runs configure/build/clean steps for each in
/// order, stopping at the first failure.
#[derive(Parser, Debug)]
#[command(name = "cmakepilot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Process all build presets. If this is not specified, build presets
    /// whose configure preset does not have COPY_BUILD enabled are excluded
    #[arg(long)]
    pub all: bool,

    /// List the presets that would be processed given the current
    /// arguments, without running anything
    #[arg(long)]
    pub list_only: bool,

    /// Clean before building
    #[arg(long)]
    pub rebuild: bool,

    /// Skip the CMake configure step
    #[arg(long)]
    pub skip_configure: bool,

    /// Skip the build step
    #[arg(long)]
    pub skip_build: bool,

    /// Only clean the targets; suppresses configure and build entirely
    #[arg(long)]
    pub clean_only: bool,

    /// Presets file (overrides discovery in the working directory)
    #[arg(long)]
    pub presets: Option<String>,

    /// Config file path (overrides default XDG paths)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Convert the preset-runner flags into run options
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            include_all: self.all,
            list_only: self.list_only,
            clean_only: self.clean_only,
            skip_configure: self.skip_configure,
            skip_build: self.skip_build,
            rebuild: self.rebuild,
        }
    }
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reformat source files in place with the external formatter
    Fmt(FmtArgs),
}

/// Arguments for the `fmt` subcommand
#[derive(Parser, Debug)]
pub struct FmtArgs {
    /// Root directory to sweep (defaults to the configured root)
    #[arg(long)]
    pub root: Option<String>,

    /// Formatter command (defaults to the configured formatter)
    #[arg(long)]
    pub formatter: Option<String>,

    /// File extensions to match, case-insensitive (repeatable)
    #[arg(short = 'e', long = "extension")]
    pub extensions: Vec<String>,
}
