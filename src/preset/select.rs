//! Build preset selection
//!
//! Filtering never reorders: the selection is always a subsequence of the
//! catalog's build preset list, and execution order equals selection order.

use super::model::{BuildPreset, PresetCatalog};

/// Select the build presets to process.
///
/// With `include_all` every build preset is kept. Otherwise only those whose
/// resolved configure preset has a truthy `COPY_BUILD` cache variable
/// survive; a build preset whose `configurePreset` reference does not
/// resolve is excluded, treated as not having the flag.
pub fn select_build_presets(catalog: &PresetCatalog, include_all: bool) -> Vec<&BuildPreset> {
    catalog
        .build_presets
        .iter()
        .filter(|preset| {
            include_all
                || catalog
                    .configure_preset(&preset.configure_preset)
                    .is_some_and(|cp| cp.copy_build_enabled())
        })
        .collect()
}
