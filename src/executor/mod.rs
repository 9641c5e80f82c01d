//! Subprocess execution for cmakepilot
//!
//! Wraps `tokio::process` with options for working directory, environment,
//! timeouts and captured vs. inherited output.

pub mod exec;

pub use exec::{exec_command, exec_command_sync, ExecOptions, ExecResult};
