//! Settings loader with XDG-compliant path resolution
//!
//! Settings are merged from multiple locations with layered priority:
//! 1. `/etc/cmakepilot/config.toml` (lowest priority)
//! 2. `~/.config/cmakepilot/config.toml`
//! 3. `~/.cmakepilot.toml`
//! 4. `./.cmakepilot.toml` (highest priority)
//!
//! Environment variables with the `CMAKEPILOT_` prefix override all
//! file-based settings, e.g. `CMAKEPILOT_CMAKE__COMMAND=/opt/cmake/bin/cmake`
//! maps to `cmake.command`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use super::model::Settings;

/// Application name used for XDG directories
const APP_NAME: &str = "cmakepilot";

/// Get settings search paths in priority order (lowest to highest)
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(format!("/etc/{}/config.toml", APP_NAME)));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{}.toml", APP_NAME)));
    }

    paths.push(PathBuf::from(format!(".{}.toml", APP_NAME)));

    paths
}

/// Load settings with XDG layering.
///
/// Files are merged in priority order, later files overriding earlier ones;
/// an explicit `override_path` takes precedence over all of them, and
/// environment variables win over everything.
pub fn load_settings(override_path: Option<&str>) -> Result<Settings> {
    let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

    for path in config_paths() {
        if path.exists() {
            tracing::debug!("Loading settings from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }
    }

    if let Some(path) = override_path {
        let path = PathBuf::from(path);
        if path.exists() {
            tracing::debug!("Loading override settings from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        } else {
            tracing::warn!("Override settings not found: {}", path.display());
        }
    }

    figment = figment.merge(Env::prefixed("CMAKEPILOT_").split("__"));

    figment.extract().context("Failed to load settings")
}
