//! Formatter sweep for cmakepilot
//!
//! Walks a source tree and reformats matching files in place with an
//! external formatter, one file at a time.

pub mod sweep;

pub use sweep::{sweep, SweepOptions, SweepSummary};
