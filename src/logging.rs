//! Tracing subscriber setup for the CLI.
//!
//! Log filtering can be controlled via environment variables in priority
//! order: `CMAKEPILOT_LOG`, then `RUST_LOG`, then a default based on the
//! `--verbose` flag.

use std::io::IsTerminal;

/// Initialize the global tracing subscriber.
///
/// Must be called at most once per process.
pub fn init(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("CMAKEPILOT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            if verbose {
                EnvFilter::new("debug")
            } else {
                EnvFilter::new("warn")
            }
        });

    let use_ansi = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
