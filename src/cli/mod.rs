//! CLI module for cmakepilot
//!
//! The top-level command runs the preset runner; the `fmt` subcommand runs
//! the formatter sweep.

pub mod commands;

pub use commands::{Cli, Commands, FmtArgs};
