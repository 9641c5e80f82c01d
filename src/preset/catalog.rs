//! Loading the preset catalog from disk
//!
//! A catalog is read either from an explicit file path or discovered in a
//! directory: `CMakePresets.json` first, then `CMakeUserPresets.json`
//! appended after it. The catalog is loaded once per run and read-only
//! thereafter.

use std::path::Path;

use crate::error::TaskError;

use super::model::PresetCatalog;

/// Project-level presets file
pub const PROJECT_PRESETS_FILE: &str = "CMakePresets.json";

/// User-level presets file, appended after the project file
pub const USER_PRESETS_FILE: &str = "CMakeUserPresets.json";

/// Load a catalog from a single presets file
pub fn load_catalog_file(path: &Path) -> Result<PresetCatalog, TaskError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TaskError::CatalogNotFound {
                path: path.display().to_string(),
            }
        } else {
            TaskError::Io(e)
        }
    })?;

    serde_json::from_str(&text).map_err(|source| TaskError::CatalogParse {
        path: path.display().to_string(),
        source,
    })
}

/// Discover and load the catalog from a directory.
///
/// Reads whichever of the two presets files exist and merges them in order.
/// Fails with `CatalogNotFound` when neither file is present.
pub fn discover_catalog(dir: &Path) -> Result<PresetCatalog, TaskError> {
    let mut catalog = PresetCatalog::default();
    let mut found = false;

    for file in [PROJECT_PRESETS_FILE, USER_PRESETS_FILE] {
        let path = dir.join(file);
        if path.is_file() {
            tracing::debug!("Loading presets from: {}", path.display());
            catalog.merge(load_catalog_file(&path)?);
            found = true;
        }
    }

    if !found {
        return Err(TaskError::CatalogNotFound {
            path: dir.join(USER_PRESETS_FILE).display().to_string(),
        });
    }

    Ok(catalog)
}
