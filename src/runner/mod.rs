//! Preset runner for cmakepilot
//!
//! Selects which build presets to act on (see [`crate::preset`]), plans the
//! configure/build/clean steps implied by the flags, and runs them strictly
//! in order, stopping at the first failure.

pub mod banner;
pub mod runner;
pub mod steps;
pub mod tool;

pub use banner::{banner, print_banner, DEFAULT_BORDER};
pub use runner::{render_preset_list, PresetRunner, NO_PRESETS_MESSAGE};
pub use steps::{plan_steps, RunOptions, StepKind};
pub use tool::{BuildTool, CmakeTool, StepStatus};
