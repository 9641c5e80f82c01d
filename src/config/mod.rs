//! Tool settings for cmakepilot
//!
//! XDG-compliant layered TOML configuration for the things that are not part
//! of the preset catalog: the cmake command, an optional presets file path
//! and formatter sweep defaults.

pub mod loader;
pub mod model;

pub use loader::{config_paths, load_settings};
pub use model::{CmakeSettings, FormatSettings, PresetSettings, Settings};
