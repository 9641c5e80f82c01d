//! Preset catalog for cmakepilot
//!
//! Models the subset of the CMake presets JSON schema the runner consults,
//! loads it from disk and selects which build presets to process.

pub mod catalog;
pub mod model;
pub mod select;

pub use catalog::{discover_catalog, load_catalog_file, PROJECT_PRESETS_FILE, USER_PRESETS_FILE};
pub use model::{BuildPreset, CacheVariable, ConfigurePreset, PresetCatalog, COPY_BUILD};
pub use select::select_build_presets;
