//! Data model for the CMake presets catalog
//!
//! Only the fields the runner consults are modeled; everything else in the
//! presets schema is ignored on deserialization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cache variable marking a configure preset's build presets as included
/// by default.
pub const COPY_BUILD: &str = "COPY_BUILD";

/// Ordered catalog of configure and build presets
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresetCatalog {
    pub configure_presets: Vec<ConfigurePreset>,
    pub build_presets: Vec<BuildPreset>,
}

impl PresetCatalog {
    /// Look up a configure preset by name
    pub fn configure_preset(&self, name: &str) -> Option<&ConfigurePreset> {
        self.configure_presets.iter().find(|p| p.name == name)
    }

    /// Append another catalog's presets, preserving order.
    ///
    /// User presets are appended after project presets, matching how CMake
    /// combines `CMakePresets.json` and `CMakeUserPresets.json`.
    pub fn merge(&mut self, other: PresetCatalog) {
        self.configure_presets.extend(other.configure_presets);
        self.build_presets.extend(other.build_presets);
    }
}

/// Named configuration of the generation step
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurePreset {
    pub name: String,
    pub cache_variables: HashMap<String, CacheVariable>,
}

impl ConfigurePreset {
    /// Whether this preset's build presets are included by default
    pub fn copy_build_enabled(&self) -> bool {
        self.cache_variables
            .get(COPY_BUILD)
            .is_some_and(CacheVariable::is_truthy)
    }
}

/// Named configuration of the build step, referencing one configure preset
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildPreset {
    pub name: String,
    pub configure_preset: String,
}

/// A cache variable value: bool, string, or a typed `{type, value}` object
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CacheVariable {
    Bool(bool),
    String(String),
    Typed {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        var_type: Option<String>,
        value: CacheLiteral,
    },
}

/// The leaf value inside a typed cache variable
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CacheLiteral {
    Bool(bool),
    String(String),
}

impl CacheVariable {
    /// Truthiness following CMake's `if()` constant rules
    pub fn is_truthy(&self) -> bool {
        match self {
            CacheVariable::Bool(b) => *b,
            CacheVariable::String(s) => cmake_truthy(s),
            CacheVariable::Typed { value, .. } => match value {
                CacheLiteral::Bool(b) => *b,
                CacheLiteral::String(s) => cmake_truthy(s),
            },
        }
    }
}

/// CMake `if()` constant semantics: `0`, `OFF`, `NO`, `FALSE`, `N`,
/// `IGNORE`, `NOTFOUND`, `*-NOTFOUND` and the empty string are false,
/// non-zero numbers and any other string are true.
fn cmake_truthy(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    if let Ok(number) = trimmed.parse::<f64>() {
        return number != 0.0;
    }
    let upper = trimmed.to_ascii_uppercase();
    if upper.ends_with("-NOTFOUND") {
        return false;
    }
    !matches!(
        upper.as_str(),
        "OFF" | "NO" | "FALSE" | "N" | "IGNORE" | "NOTFOUND"
    )
}
